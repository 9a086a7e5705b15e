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

use crate::role::RoleRef;
use crate::user_group::UserGroup;
use crate::user_group::UserGroupPayload;
use crate::user_group::UserGroups;
use crate::Error;
use crate::RoleId;
use crate::SatelliteClient;
use crate::UserGroupId;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;
use std::collections::BTreeSet;

/// Desired configuration of a managed user group. `admin` left unset
/// keeps the server default of a non-administrator group.
#[derive(Debug, Clone, PartialEq)]
pub struct UserGroupConfig {
    pub name: String,
    pub admin: Option<bool>,
    pub role_ids: BTreeSet<RoleId>,
}

impl UserGroupConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin: None,
            role_ids: BTreeSet::new(),
        }
    }
}

/// Observed state of a managed user group. The role id set is derived
/// from the role references the server reports.
#[derive(Debug, Clone, PartialEq)]
pub struct UserGroupState {
    pub id: UserGroupId,
    pub name: Option<String>,
    pub admin: Option<bool>,
    pub role_ids: BTreeSet<RoleId>,
    pub roles: Vec<RoleRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Manages one user group.
pub struct UserGroupResource<S> {
    user_groups: UserGroups<S>,
}

impl<S> Clone for UserGroupResource<S> {
    fn clone(&self) -> Self {
        Self {
            user_groups: self.user_groups.clone(),
        }
    }
}

impl<S: Satellite> UserGroupResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            user_groups: client.user_groups(),
        }
    }

    fn state(user_group: &UserGroup) -> UserGroupState {
        UserGroupState {
            id: user_group.id,
            name: user_group.name.clone(),
            admin: user_group.admin,
            role_ids: user_group.roles.iter().map(|role| role.id).collect(),
            roles: user_group.roles.clone(),
            created_at: user_group.created_at.clone(),
            updated_at: user_group.updated_at.clone(),
        }
    }

    /// Create the user group and return its observed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the creation.
    pub async fn create(&self, config: &UserGroupConfig) -> Result<UserGroupState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = UserGroupPayload {
            name: Some(config.name.clone()),
            admin: config.admin,
            ..UserGroupPayload::default()
        };
        if !config.role_ids.is_empty() {
            payload.role_ids = Some(config.role_ids.clone());
        }
        let created = self.user_groups.create(&payload).await?;
        let user_group = self.user_groups.get(created.id).await?;
        Ok(Self::state(&user_group))
    }

    /// Read the user group, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the user group being gone.
    pub async fn read(&self, id: UserGroupId) -> Result<Option<UserGroupState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.user_groups.get(id).await {
            Ok(user_group) => Ok(Some(Self::state(&user_group))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`, sending only the changed
    /// fields and skipping the call when nothing changed. A role set
    /// that changed to empty is sent as an empty list, clearing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the update.
    pub async fn update(
        &self,
        id: UserGroupId,
        prior: &UserGroupState,
        config: &UserGroupConfig,
    ) -> Result<UserGroupState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = UserGroupPayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        if let Some(admin) = config.admin {
            if prior.admin != Some(admin) {
                payload.admin = Some(admin);
            }
        }
        if config.role_ids != prior.role_ids {
            payload.role_ids = Some(config.role_ids.clone());
        }
        if payload != UserGroupPayload::default() {
            self.user_groups.update(id, &payload).await?;
        }
        let user_group = self.user_groups.get(id).await?;
        Ok(Self::state(&user_group))
    }

    /// Delete the user group.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: UserGroupId) -> Result<(), Error<S::Error>> {
        self.user_groups.delete(id).await
    }

    /// Read a user group created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no user group has this id.
    pub async fn import(&self, id: UserGroupId) -> Result<UserGroupState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "user group",
                id: *id.inner(),
            }),
        }
    }
}
