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

use crate::host_collection::HostCollection;
use crate::host_collection::HostCollectionPayload;
use crate::host_collection::HostCollections;
use crate::Error;
use crate::HostCollectionId;
use crate::OrganizationId;
use crate::SatelliteClient;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;

/// Desired configuration of a managed host collection. The organization
/// is fixed at creation; changing it means replacing the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCollectionConfig {
    pub organization_id: OrganizationId,
    pub name: String,
    pub description: Option<String>,
    pub max_hosts: Option<u64>,
    pub unlimited_hosts: bool,
}

impl HostCollectionConfig {
    #[must_use]
    pub fn new(organization_id: OrganizationId, name: impl Into<String>) -> Self {
        Self {
            organization_id,
            name: name.into(),
            description: None,
            max_hosts: None,
            unlimited_hosts: true,
        }
    }
}

/// Observed state of a managed host collection.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCollectionState {
    pub id: HostCollectionId,
    pub organization_id: Option<OrganizationId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_hosts: Option<u64>,
    pub unlimited_hosts: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Manages one host collection.
pub struct HostCollectionResource<S> {
    host_collections: HostCollections<S>,
}

impl<S> Clone for HostCollectionResource<S> {
    fn clone(&self) -> Self {
        Self {
            host_collections: self.host_collections.clone(),
        }
    }
}

impl<S: Satellite> HostCollectionResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            host_collections: client.host_collections(),
        }
    }

    fn state(collection: &HostCollection) -> HostCollectionState {
        HostCollectionState {
            id: collection.id,
            organization_id: collection.organization_id,
            name: collection.name.clone(),
            description: collection.description.clone(),
            max_hosts: collection.max_hosts,
            unlimited_hosts: collection.unlimited_hosts,
            created_at: collection.created_at.clone(),
            updated_at: collection.updated_at.clone(),
        }
    }

    /// Create the host collection in its organization and return its
    /// observed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the creation.
    pub async fn create(
        &self,
        config: &HostCollectionConfig,
    ) -> Result<HostCollectionState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let payload = HostCollectionPayload {
            name: Some(config.name.clone()),
            description: config.description.clone(),
            max_hosts: config.max_hosts,
            unlimited_hosts: Some(config.unlimited_hosts),
        };
        let created = self
            .host_collections
            .create(config.organization_id, &payload)
            .await?;
        let collection = self.host_collections.get(created.id).await?;
        Ok(Self::state(&collection))
    }

    /// Read the host collection, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the collection being gone.
    pub async fn read(
        &self,
        id: HostCollectionId,
    ) -> Result<Option<HostCollectionState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.host_collections.get(id).await {
            Ok(collection) => Ok(Some(Self::state(&collection))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`, sending only the changed
    /// fields and skipping the call when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the update.
    pub async fn update(
        &self,
        id: HostCollectionId,
        prior: &HostCollectionState,
        config: &HostCollectionConfig,
    ) -> Result<HostCollectionState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = HostCollectionPayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        let desired_description = config.description.clone().unwrap_or_default();
        if prior.description.clone().unwrap_or_default() != desired_description {
            payload.description = Some(desired_description);
        }
        if config.max_hosts.is_some() && config.max_hosts != prior.max_hosts {
            payload.max_hosts = config.max_hosts;
        }
        if prior.unlimited_hosts != Some(config.unlimited_hosts) {
            payload.unlimited_hosts = Some(config.unlimited_hosts);
        }
        if payload != HostCollectionPayload::default() {
            self.host_collections.update(id, &payload).await?;
        }
        let collection = self.host_collections.get(id).await?;
        Ok(Self::state(&collection))
    }

    /// Delete the host collection.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: HostCollectionId) -> Result<(), Error<S::Error>> {
        self.host_collections.delete(id).await
    }

    /// Read a host collection created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no host collection has this id.
    pub async fn import(&self, id: HostCollectionId) -> Result<HostCollectionState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "host collection",
                id: *id.inner(),
            }),
        }
    }
}
