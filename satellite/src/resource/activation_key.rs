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

use crate::activation_key::ActivationKey;
use crate::activation_key::ActivationKeyPayload;
use crate::activation_key::ActivationKeys;
use crate::host_collection::HostCollectionRef;
use crate::reconcile::reconcile;
use crate::ActivationKeyId;
use crate::ContentViewId;
use crate::Error;
use crate::HostCollectionId;
use crate::LifecycleEnvironmentId;
use crate::OrganizationId;
use crate::SatelliteClient;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;
use std::collections::BTreeSet;

/// Desired configuration of a managed activation key. The organization
/// is fixed at creation; changing it means replacing the key.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationKeyConfig {
    pub name: String,
    pub organization_id: OrganizationId,
    pub description: Option<String>,
    pub content_view_id: Option<ContentViewId>,
    pub environment_id: Option<LifecycleEnvironmentId>,
    pub max_hosts: Option<u64>,
    pub unlimited_hosts: bool,
    pub host_collection_ids: BTreeSet<HostCollectionId>,
}

impl ActivationKeyConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, organization_id: OrganizationId) -> Self {
        Self {
            name: name.into(),
            organization_id,
            description: None,
            content_view_id: None,
            environment_id: None,
            max_hosts: None,
            unlimited_hosts: true,
            host_collection_ids: BTreeSet::new(),
        }
    }
}

/// Observed state of a managed activation key. The host collection id
/// set is derived from the references the server reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationKeyState {
    pub id: ActivationKeyId,
    pub name: Option<String>,
    pub organization_id: Option<OrganizationId>,
    pub description: Option<String>,
    pub content_view_id: Option<ContentViewId>,
    pub environment_id: Option<LifecycleEnvironmentId>,
    pub max_hosts: Option<u64>,
    pub unlimited_hosts: Option<bool>,
    pub host_collection_ids: BTreeSet<HostCollectionId>,
    pub host_collections: Vec<HostCollectionRef>,
}

/// Manages one activation key, including its host collection
/// membership.
pub struct ActivationKeyResource<S> {
    activation_keys: ActivationKeys<S>,
}

impl<S> Clone for ActivationKeyResource<S> {
    fn clone(&self) -> Self {
        Self {
            activation_keys: self.activation_keys.clone(),
        }
    }
}

impl<S: Satellite> ActivationKeyResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            activation_keys: client.activation_keys(),
        }
    }

    fn state(key: &ActivationKey) -> ActivationKeyState {
        ActivationKeyState {
            id: key.id,
            name: key.name.clone(),
            organization_id: key.organization_id,
            description: key.description.clone(),
            content_view_id: key.content_view_id,
            environment_id: key.environment_id,
            max_hosts: key.max_hosts,
            unlimited_hosts: key.unlimited_hosts,
            host_collection_ids: key
                .host_collections
                .iter()
                .map(|collection| collection.id)
                .collect(),
            host_collections: key.host_collections.clone(),
        }
    }

    /// Create the activation key and return its observed state. Host
    /// collections are associated with one bulk call after the key
    /// exists, skipped when none are configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the creation or the association.
    pub async fn create(
        &self,
        config: &ActivationKeyConfig,
    ) -> Result<ActivationKeyState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let payload = ActivationKeyPayload {
            name: Some(config.name.clone()),
            organization_id: Some(config.organization_id),
            description: config.description.clone(),
            content_view_id: config.content_view_id,
            environment_id: config.environment_id,
            max_hosts: config.max_hosts,
            unlimited_hosts: Some(config.unlimited_hosts),
        };
        let created = self.activation_keys.create(&payload).await?;
        if !config.host_collection_ids.is_empty() {
            let ids: Vec<HostCollectionId> = config.host_collection_ids.iter().copied().collect();
            self.activation_keys
                .add_host_collections(created.id, &ids)
                .await?;
        }
        let key = self.activation_keys.get(created.id).await?;
        Ok(Self::state(&key))
    }

    /// Read the activation key, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the key being gone.
    pub async fn read(
        &self,
        id: ActivationKeyId,
    ) -> Result<Option<ActivationKeyState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.activation_keys.get(id).await {
            Ok(key) => Ok(Some(Self::state(&key))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`. Scalar fields go out in one
    /// update call with only the changed fields, skipped when nothing
    /// changed. Host collection membership is then reconciled with at
    /// most two bulk calls, additions before removals, each skipped
    /// when its half of the edit is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects any of the calls.
    pub async fn update(
        &self,
        id: ActivationKeyId,
        prior: &ActivationKeyState,
        config: &ActivationKeyConfig,
    ) -> Result<ActivationKeyState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = ActivationKeyPayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        let desired_description = config.description.clone().unwrap_or_default();
        if prior.description.clone().unwrap_or_default() != desired_description {
            payload.description = Some(desired_description);
        }
        if config.content_view_id.is_some() && config.content_view_id != prior.content_view_id {
            payload.content_view_id = config.content_view_id;
        }
        if config.environment_id.is_some() && config.environment_id != prior.environment_id {
            payload.environment_id = config.environment_id;
        }
        if config.max_hosts.is_some() && config.max_hosts != prior.max_hosts {
            payload.max_hosts = config.max_hosts;
        }
        if prior.unlimited_hosts != Some(config.unlimited_hosts) {
            payload.unlimited_hosts = Some(config.unlimited_hosts);
        }
        if payload != ActivationKeyPayload::default() {
            self.activation_keys.update(id, &payload).await?;
        }
        let edits = reconcile(&prior.host_collection_ids, &config.host_collection_ids);
        if !edits.to_add.is_empty() {
            self.activation_keys
                .add_host_collections(id, &edits.to_add)
                .await?;
        }
        if !edits.to_remove.is_empty() {
            self.activation_keys
                .remove_host_collections(id, &edits.to_remove)
                .await?;
        }
        let key = self.activation_keys.get(id).await?;
        Ok(Self::state(&key))
    }

    /// Delete the activation key.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: ActivationKeyId) -> Result<(), Error<S::Error>> {
        self.activation_keys.delete(id).await
    }

    /// Read an activation key created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no activation key has this id.
    pub async fn import(&self, id: ActivationKeyId) -> Result<ActivationKeyState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "activation key",
                id: *id.inner(),
            }),
        }
    }
}
