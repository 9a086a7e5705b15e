// SPDX-FileCopyrightText: Copyright (c) 2026 rh-satellite contributors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Permissions. Permissions are defined by the server and only queried,
//! never created. Each belongs to a resource type, except the
//! miscellaneous ones whose `resource_type` is null.

use crate::Error;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Permission identifier.
pub type PermissionId = TaggedType<u64, PermissionIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum PermissionIdTag {}

/// Permission as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Permission {
    pub id: PermissionId,
    pub name: Option<String>,
    pub resource_type: Option<String>,
}

/// Access to the permissions collection.
pub struct Permissions<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Permissions<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Permissions<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::foreman("permissions")
    }

    /// List permissions matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<Permission>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// List the permissions that apply to one resource type. An empty
    /// `resource_type` selects the miscellaneous permissions, which carry
    /// no resource type of their own and cannot be searched for.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn for_resource_type(
        &self,
        resource_type: &str,
    ) -> Result<Vec<Permission>, Error<S::Error>> {
        if resource_type.is_empty() {
            let listing = self.list(&SearchQuery::new().per_page(400)).await?;
            return Ok(listing
                .results
                .iter()
                .filter(|permission| permission.resource_type.is_none())
                .cloned()
                .collect());
        }
        let query = SearchQuery::new().search(format!("resource_type={resource_type}"));
        let listing = self.list(&query).await?;
        Ok(listing.results.clone())
    }
}
