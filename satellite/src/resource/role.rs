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

use crate::location::LocationRef;
use crate::organization::OrganizationRef;
use crate::role::Role;
use crate::role::RolePayload;
use crate::role::Roles;
use crate::Error;
use crate::FilterId;
use crate::LocationId;
use crate::OrganizationId;
use crate::RoleId;
use crate::SatelliteClient;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;
use std::collections::BTreeSet;

/// Desired configuration of a managed role. An empty id set leaves the
/// scoping untouched on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleConfig {
    pub name: String,
    pub description: Option<String>,
    pub location_ids: BTreeSet<LocationId>,
    pub organization_ids: BTreeSet<OrganizationId>,
}

impl RoleConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            location_ids: BTreeSet::new(),
            organization_ids: BTreeSet::new(),
        }
    }
}

/// Observed state of a managed role. The id sets are derived from the
/// location and organization references the server reports.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleState {
    pub id: RoleId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location_ids: BTreeSet<LocationId>,
    pub organization_ids: BTreeSet<OrganizationId>,
    pub builtin: Option<u64>,
    pub cloned_from_id: Option<RoleId>,
    pub origin: Option<String>,
    pub filters: Vec<FilterId>,
    pub locations: Vec<LocationRef>,
    pub organizations: Vec<OrganizationRef>,
}

/// Manages one role.
pub struct RoleResource<S> {
    roles: Roles<S>,
}

impl<S> Clone for RoleResource<S> {
    fn clone(&self) -> Self {
        Self {
            roles: self.roles.clone(),
        }
    }
}

impl<S: Satellite> RoleResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            roles: client.roles(),
        }
    }

    fn state(role: &Role) -> RoleState {
        RoleState {
            id: role.id,
            name: role.name.clone(),
            description: role.description.clone(),
            location_ids: role.locations.iter().map(|location| location.id).collect(),
            organization_ids: role
                .organizations
                .iter()
                .map(|organization| organization.id)
                .collect(),
            builtin: role.builtin,
            cloned_from_id: role.cloned_from_id,
            origin: role.origin.clone(),
            filters: role.filters.iter().map(|filter| filter.id).collect(),
            locations: role.locations.clone(),
            organizations: role.organizations.clone(),
        }
    }

    /// Create the role and return its observed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the creation.
    pub async fn create(&self, config: &RoleConfig) -> Result<RoleState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = RolePayload {
            name: Some(config.name.clone()),
            description: config.description.clone(),
            ..RolePayload::default()
        };
        if !config.location_ids.is_empty() {
            payload.location_ids = Some(config.location_ids.clone());
        }
        if !config.organization_ids.is_empty() {
            payload.organization_ids = Some(config.organization_ids.clone());
        }
        let created = self.roles.create(&payload).await?;
        let role = self.roles.get(created.id).await?;
        Ok(Self::state(&role))
    }

    /// Read the role, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the role being gone.
    pub async fn read(&self, id: RoleId) -> Result<Option<RoleState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.roles.get(id).await {
            Ok(role) => Ok(Some(Self::state(&role))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`, sending only the changed
    /// fields and skipping the call when nothing changed. A scoping set
    /// that changed to empty is sent as an empty list, clearing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the update.
    pub async fn update(
        &self,
        id: RoleId,
        prior: &RoleState,
        config: &RoleConfig,
    ) -> Result<RoleState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = RolePayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        let description = config.description.clone().unwrap_or_default();
        if prior.description.clone().unwrap_or_default() != description {
            payload.description = Some(description);
        }
        if config.location_ids != prior.location_ids {
            payload.location_ids = Some(config.location_ids.clone());
        }
        if config.organization_ids != prior.organization_ids {
            payload.organization_ids = Some(config.organization_ids.clone());
        }
        if payload != RolePayload::default() {
            self.roles.update(id, &payload).await?;
        }
        let role = self.roles.get(id).await?;
        Ok(Self::state(&role))
    }

    /// Delete the role.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: RoleId) -> Result<(), Error<S::Error>> {
        self.roles.delete(id).await
    }

    /// Read a role created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no role has this id.
    pub async fn import(&self, id: RoleId) -> Result<RoleState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "role",
                id: *id.inner(),
            }),
        }
    }
}
