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

use crate::organization::Organization;
use crate::organization::OrganizationPayload;
use crate::organization::Organizations;
use crate::Error;
use crate::OrganizationId;
use crate::SatelliteClient;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;

/// Desired configuration of a managed organization.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationConfig {
    pub name: String,
    pub description: Option<String>,
    /// Set once at creation; Satellite derives the label from `name`
    /// when left unset, and never changes it afterwards.
    pub label: Option<String>,
}

impl OrganizationConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            label: None,
        }
    }
}

/// Observed state of a managed organization.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationState {
    pub id: OrganizationId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
    pub title: Option<String>,
    pub hosts_count: Option<u64>,
}

/// Manages one organization.
pub struct OrganizationResource<S> {
    organizations: Organizations<S>,
}

impl<S> Clone for OrganizationResource<S> {
    fn clone(&self) -> Self {
        Self {
            organizations: self.organizations.clone(),
        }
    }
}

impl<S: Satellite> OrganizationResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            organizations: client.organizations(),
        }
    }

    fn state(organization: &Organization) -> OrganizationState {
        OrganizationState {
            id: organization.id,
            name: organization.name.clone(),
            description: organization.description.clone(),
            label: organization.label.clone(),
            title: organization.title.clone(),
            hosts_count: organization.hosts_count,
        }
    }

    /// Create the organization and return its observed state.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the creation.
    pub async fn create(
        &self,
        config: &OrganizationConfig,
    ) -> Result<OrganizationState, Error<S::Error>> {
        let payload = OrganizationPayload {
            name: Some(config.name.clone()),
            description: config.description.clone(),
            label: config.label.clone(),
        };
        let created = self.organizations.create(&payload).await?;
        let organization = self.organizations.get(created.id).await?;
        Ok(Self::state(&organization))
    }

    /// Read the organization, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the organization being gone.
    pub async fn read(
        &self,
        id: OrganizationId,
    ) -> Result<Option<OrganizationState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.organizations.get(id).await {
            Ok(organization) => Ok(Some(Self::state(&organization))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`, sending only the changed
    /// fields and skipping the call when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the update.
    pub async fn update(
        &self,
        id: OrganizationId,
        prior: &OrganizationState,
        config: &OrganizationConfig,
    ) -> Result<OrganizationState, Error<S::Error>> {
        let mut payload = OrganizationPayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        let description = config.description.clone().unwrap_or_default();
        if prior.description.clone().unwrap_or_default() != description {
            payload.description = Some(description);
        }
        if payload != OrganizationPayload::default() {
            self.organizations.update(id, &payload).await?;
        }
        let organization = self.organizations.get(id).await?;
        Ok(Self::state(&organization))
    }

    /// Delete the organization.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: OrganizationId) -> Result<(), Error<S::Error>> {
        self.organizations.delete(id).await
    }

    /// Read an organization created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no organization has this id.
    pub async fn import(&self, id: OrganizationId) -> Result<OrganizationState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "organization",
                id: *id.inner(),
            }),
        }
    }
}
