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

//! Activation keys. A key registers hosts into an organization, pins
//! them to a content view and lifecycle environment, and enrolls them
//! into [host collections](crate::host_collection):
//!
//! - Katello takes activation key fields at the top level of the body,
//!   without the wrapping object the Foreman entities use;
//! - host collection membership is not updated in place but edited
//!   through the `host_collections` and `remove_host_collections`
//!   sub-resources, each taking a batch of ids.

use crate::host_collection::HostCollectionRef;
use crate::ContentViewId;
use crate::Error;
use crate::HostCollectionId;
use crate::LifecycleEnvironmentId;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::Empty;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Activation key identifier.
pub type ActivationKeyId = TaggedType<u64, ActivationKeyIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ActivationKeyIdTag {}

/// Activation key as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivationKey {
    pub id: ActivationKeyId,
    pub name: Option<String>,
    pub organization_id: Option<OrganizationId>,
    pub content_view_id: Option<ContentViewId>,
    pub description: Option<String>,
    pub environment_id: Option<LifecycleEnvironmentId>,
    pub max_hosts: Option<u64>,
    pub unlimited_hosts: Option<bool>,
    #[serde(default)]
    pub host_collections: Vec<HostCollectionRef>,
}

/// Abbreviated activation key reference embedded in other entities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivationKeyRef {
    pub id: ActivationKeyId,
    pub name: Option<String>,
}

/// Fields accepted by activation key create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ActivationKeyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrganizationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_view_id: Option<ContentViewId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<LifecycleEnvironmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hosts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited_hosts: Option<bool>,
}

#[derive(Serialize)]
struct HostCollectionIds<'a> {
    host_collection_ids: &'a [HostCollectionId],
}

/// Access to the activation keys collection.
pub struct ActivationKeys<S> {
    satellite: Arc<S>,
}

impl<S> Clone for ActivationKeys<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> ActivationKeys<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::katello("activation_keys")
    }

    /// List activation keys matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<ActivationKey>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one activation key by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: ActivationKeyId) -> Result<Arc<ActivationKey>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create an activation key.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(
        &self,
        payload: &ActivationKeyPayload,
    ) -> Result<ActivationKey, Error<S::Error>> {
        self.satellite
            .create(&Self::root(), payload)
            .await
            .map_err(Error::Api)
    }

    /// Update an activation key. Only the payload's `Some` fields change.
    /// Host collection membership is edited through
    /// [`add_host_collections`](Self::add_host_collections) and
    /// [`remove_host_collections`](Self::remove_host_collections) instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: ActivationKeyId,
        payload: &ActivationKeyPayload,
    ) -> Result<ActivationKey, Error<S::Error>> {
        self.satellite
            .update(&Self::root().join(id), payload)
            .await
            .map_err(Error::Api)
    }

    /// Delete an activation key.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: ActivationKeyId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// Associate the given host collections with an activation key.
    /// Collections already associated stay associated.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the batch.
    pub async fn add_host_collections(
        &self,
        id: ActivationKeyId,
        host_collections: &[HostCollectionId],
    ) -> Result<(), Error<S::Error>> {
        let body = HostCollectionIds {
            host_collection_ids: host_collections,
        };
        self.satellite
            .update::<_, Empty>(&Self::root().join(id).join("host_collections"), &body)
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// Disassociate the given host collections from an activation key.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the batch.
    pub async fn remove_host_collections(
        &self,
        id: ActivationKeyId,
        host_collections: &[HostCollectionId],
    ) -> Result<(), Error<S::Error>> {
        let body = HostCollectionIds {
            host_collection_ids: host_collections,
        };
        self.satellite
            .update::<_, Empty>(&Self::root().join(id).join("remove_host_collections"), &body)
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }
}
