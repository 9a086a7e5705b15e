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

use crate::auth_source::AuthSourceRef;
use crate::external_user_group::ExternalUserGroup;
use crate::external_user_group::ExternalUserGroupPayload;
use crate::external_user_group::ExternalUserGroups;
use crate::AuthSourceId;
use crate::Error;
use crate::ExternalUserGroupId;
use crate::SatelliteClient;
use crate::UserGroupId;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;

/// Desired configuration of an external user group. The group maps the
/// LDAP group `name` from `auth_source_id` into the owning user group.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalUserGroupConfig {
    pub user_group_id: UserGroupId,
    pub name: String,
    pub auth_source_id: AuthSourceId,
}

impl ExternalUserGroupConfig {
    #[must_use]
    pub fn new(
        user_group_id: UserGroupId,
        name: impl Into<String>,
        auth_source_id: AuthSourceId,
    ) -> Self {
        Self {
            user_group_id,
            name: name.into(),
            auth_source_id,
        }
    }
}

/// Observed state of an external user group.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalUserGroupState {
    pub id: ExternalUserGroupId,
    pub user_group_id: UserGroupId,
    pub name: Option<String>,
    pub auth_source_id: Option<AuthSourceId>,
    pub auth_source: Option<AuthSourceRef>,
}

/// Manages one external user group nested under its owning user group.
pub struct ExternalUserGroupResource<S> {
    external_user_groups: ExternalUserGroups<S>,
}

impl<S> Clone for ExternalUserGroupResource<S> {
    fn clone(&self) -> Self {
        Self {
            external_user_groups: self.external_user_groups.clone(),
        }
    }
}

impl<S: Satellite> ExternalUserGroupResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            external_user_groups: client.external_user_groups(),
        }
    }

    fn state(user_group: UserGroupId, external: &ExternalUserGroup) -> ExternalUserGroupState {
        ExternalUserGroupState {
            id: external.id,
            user_group_id: user_group,
            name: external.name.clone(),
            auth_source_id: external.auth_source_ldap.as_ref().map(|source| source.id),
            auth_source: external.auth_source_ldap.clone(),
        }
    }

    /// Create the external user group and return its observed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the creation.
    pub async fn create(
        &self,
        config: &ExternalUserGroupConfig,
    ) -> Result<ExternalUserGroupState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let payload = ExternalUserGroupPayload {
            name: Some(config.name.clone()),
            auth_source_id: Some(config.auth_source_id),
        };
        let created = self
            .external_user_groups
            .create(config.user_group_id, &payload)
            .await?;
        let external = self
            .external_user_groups
            .get(config.user_group_id, created.id)
            .await?;
        Ok(Self::state(config.user_group_id, &external))
    }

    /// Read the external user group, or `None` when it no longer
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the external user group being gone.
    pub async fn read(
        &self,
        user_group: UserGroupId,
        id: ExternalUserGroupId,
    ) -> Result<Option<ExternalUserGroupState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.external_user_groups.get(user_group, id).await {
            Ok(external) => Ok(Some(Self::state(user_group, &external))),
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
        id: ExternalUserGroupId,
        prior: &ExternalUserGroupState,
        config: &ExternalUserGroupConfig,
    ) -> Result<ExternalUserGroupState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = ExternalUserGroupPayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        if prior.auth_source_id != Some(config.auth_source_id) {
            payload.auth_source_id = Some(config.auth_source_id);
        }
        if payload != ExternalUserGroupPayload::default() {
            self.external_user_groups
                .update(config.user_group_id, id, &payload)
                .await?;
        }
        let external = self
            .external_user_groups
            .get(config.user_group_id, id)
            .await?;
        Ok(Self::state(config.user_group_id, &external))
    }

    /// Delete the external user group.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(
        &self,
        user_group: UserGroupId,
        id: ExternalUserGroupId,
    ) -> Result<(), Error<S::Error>> {
        self.external_user_groups.delete(user_group, id).await
    }

    /// Read an external user group created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no external user group has this id.
    pub async fn import(
        &self,
        user_group: UserGroupId,
        id: ExternalUserGroupId,
    ) -> Result<ExternalUserGroupState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(user_group, id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "external user group",
                id: *id.inner(),
            }),
        }
    }
}
