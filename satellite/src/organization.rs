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

//! Organizations.
//!
//! Satellite serves organizations through the Katello-extended controller
//! (`/katello/api/organizations`); request bodies keep the Foreman wrapped
//! form `{"organization": {...}}`.

use crate::lookup;
use crate::Error;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Organization identifier.
pub type OrganizationId = TaggedType<u64, OrganizationIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum OrganizationIdTag {}

/// Organization as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: Option<String>,
    pub title: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub hosts_count: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Abbreviated organization reference embedded in other entities.
///
/// Different endpoints abbreviate differently (`title` for Foreman entities,
/// `label` for Katello ones), so every field besides the id is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationRef {
    pub id: OrganizationId,
    pub name: Option<String>,
    pub title: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

/// Fields accepted by organization create and update calls. `None` fields
/// stay out of the serialized body.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OrganizationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Serialize)]
struct OrganizationBody<'a> {
    organization: &'a OrganizationPayload,
}

/// Access to the organizations collection.
pub struct Organizations<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Organizations<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Organizations<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::katello("organizations")
    }

    /// List organizations matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<Organization>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one organization by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error, including a
    /// missing id.
    pub async fn get(&self, id: OrganizationId) -> Result<Arc<Organization>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(
        &self,
        payload: &OrganizationPayload,
    ) -> Result<Organization, Error<S::Error>> {
        self.satellite
            .create(
                &Self::root(),
                &OrganizationBody {
                    organization: payload,
                },
            )
            .await
            .map_err(Error::Api)
    }

    /// Update an organization. Only the payload's `Some` fields change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: OrganizationId,
        payload: &OrganizationPayload,
    ) -> Result<Organization, Error<S::Error>> {
        self.satellite
            .update(
                &Self::root().join(id),
                &OrganizationBody {
                    organization: payload,
                },
            )
            .await
            .map_err(Error::Api)
    }

    /// Delete an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: OrganizationId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// Find exactly one organization by scoped-search string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when nothing matches and
    /// [`Error::Ambiguous`] when more than one organization does.
    pub async fn find(&self, search: &str) -> Result<Organization, Error<S::Error>> {
        if search.is_empty() {
            return Err(Error::EmptyField("search"));
        }
        let listing = self.list(&SearchQuery::new().search(search)).await?;
        lookup::one_of(&listing.results, "organizations", Some(search))
    }
}
