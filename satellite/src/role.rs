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

//! Roles. A role carries a set of [filters](crate::filter) granting
//! permissions, and is scoped to locations and organizations.

use crate::filter::FilterId;
use crate::location::LocationRef;
use crate::organization::OrganizationRef;
use crate::Error;
use crate::LocationId;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Role identifier.
pub type RoleId = TaggedType<u64, RoleIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum RoleIdTag {}

/// Role as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Nonzero when the role is built in and cannot be deleted.
    pub builtin: Option<u64>,
    pub cloned_from_id: Option<RoleId>,
    pub origin: Option<String>,
    #[serde(default)]
    pub filters: Vec<RoleFilterRef>,
    #[serde(default)]
    pub locations: Vec<LocationRef>,
    #[serde(default)]
    pub organizations: Vec<OrganizationRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Filter reference embedded in a role.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleFilterRef {
    pub id: FilterId,
}

/// Abbreviated role reference embedded in other entities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleRef {
    pub id: RoleId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub origin: Option<String>,
}

/// Fields accepted by role create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RolePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<BTreeSet<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_ids: Option<BTreeSet<OrganizationId>>,
}

#[derive(Serialize)]
struct RoleBody<'a> {
    role: &'a RolePayload,
}

/// Access to the roles collection.
pub struct Roles<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Roles<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Roles<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::foreman("roles")
    }

    /// List roles matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<Role>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one role by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: RoleId) -> Result<Arc<Role>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(&self, payload: &RolePayload) -> Result<Role, Error<S::Error>> {
        self.satellite
            .create(&Self::root(), &RoleBody { role: payload })
            .await
            .map_err(Error::Api)
    }

    /// Update a role. Only the payload's `Some` fields change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: RoleId,
        payload: &RolePayload,
    ) -> Result<Role, Error<S::Error>> {
        self.satellite
            .update(&Self::root().join(id), &RoleBody { role: payload })
            .await
            .map_err(Error::Api)
    }

    /// Delete a role.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: RoleId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }
}
