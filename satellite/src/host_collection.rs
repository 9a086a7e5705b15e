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

//! Host collections. A collection groups hosts within one organization;
//! creation goes through the owning organization, all later calls
//! address the collection by its own id.

use crate::Error;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Host collection identifier.
pub type HostCollectionId = TaggedType<u64, HostCollectionIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum HostCollectionIdTag {}

/// Host collection as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostCollection {
    pub id: HostCollectionId,
    pub name: Option<String>,
    pub organization_id: Option<OrganizationId>,
    pub description: Option<String>,
    pub max_hosts: Option<u64>,
    pub unlimited_hosts: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Abbreviated host collection reference embedded in other entities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostCollectionRef {
    pub id: HostCollectionId,
    pub name: Option<String>,
}

/// Fields accepted by host collection create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct HostCollectionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hosts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited_hosts: Option<bool>,
}

/// Access to the host collections collection.
pub struct HostCollections<S> {
    satellite: Arc<S>,
}

impl<S> Clone for HostCollections<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> HostCollections<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::katello("host_collections")
    }

    /// List host collections matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<HostCollection>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one host collection by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: HostCollectionId) -> Result<Arc<HostCollection>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create a host collection in `organization`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(
        &self,
        organization: OrganizationId,
        payload: &HostCollectionPayload,
    ) -> Result<HostCollection, Error<S::Error>> {
        let path = ApiPath::katello("organizations")
            .join(organization)
            .join("host_collections");
        self.satellite
            .create(&path, payload)
            .await
            .map_err(Error::Api)
    }

    /// Update a host collection. Only the payload's `Some` fields change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: HostCollectionId,
        payload: &HostCollectionPayload,
    ) -> Result<HostCollection, Error<S::Error>> {
        self.satellite
            .update(&Self::root().join(id), payload)
            .await
            .map_err(Error::Api)
    }

    /// Delete a host collection.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: HostCollectionId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }
}
