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

use crate::subscription::ManifestHistory;
use crate::subscription::Manifests;
use crate::Error;
use crate::OrganizationId;
use crate::SatelliteClient;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;

/// Desired configuration of a managed subscription manifest. `manifest`
/// holds the zip file base64 encoded, as exported from Red Hat
/// Subscription Management. The manifest has no id of its own; it is
/// addressed through the owning organization.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestConfig {
    pub organization_id: OrganizationId,
    pub manifest: String,
}

impl ManifestConfig {
    #[must_use]
    pub fn new(organization_id: OrganizationId, manifest: impl Into<String>) -> Self {
        Self {
            organization_id,
            manifest: manifest.into(),
        }
    }
}

/// Observed state of a managed subscription manifest. The manifest
/// content can never be read back; the operation history stands in for
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestState {
    pub organization_id: OrganizationId,
    pub history: Vec<ManifestHistory>,
}

/// Manages the subscription manifest of one organization.
pub struct ManifestResource<S> {
    manifests: Manifests<S>,
}

impl<S> Clone for ManifestResource<S> {
    fn clone(&self) -> Self {
        Self {
            manifests: self.manifests.clone(),
        }
    }
}

impl<S: Satellite> ManifestResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            manifests: client.manifests(),
        }
    }

    /// Decode and upload the manifest, then return the observed state.
    /// The base64 is decoded before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadManifest`] when the base64 does not decode,
    /// otherwise an error if the upload fails.
    pub async fn create(&self, config: &ManifestConfig) -> Result<ManifestState, Error<S::Error>> {
        let manifest = STANDARD
            .decode(config.manifest.as_bytes())
            .map_err(Error::BadManifest)?;
        self.manifests
            .upload(config.organization_id, manifest)
            .await?;
        let history = self.manifests.history(config.organization_id).await?;
        Ok(ManifestState {
            organization_id: config.organization_id,
            history: history.as_ref().clone(),
        })
    }

    /// Read the manifest's operation history, or `None` when the
    /// organization no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the organization being gone.
    pub async fn read(
        &self,
        organization: OrganizationId,
    ) -> Result<Option<ManifestState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.manifests.history(organization).await {
            Ok(history) => Ok(Some(ManifestState {
                organization_id: organization,
                history: history.as_ref().clone(),
            })),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Refresh the attached manifest from Red Hat Subscription
    /// Management and return the new observed state. Refreshing pulls
    /// the current export of the same allocation; a changed manifest
    /// string does not re-upload.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh task cannot be started.
    pub async fn update(&self, config: &ManifestConfig) -> Result<ManifestState, Error<S::Error>> {
        self.manifests.refresh(config.organization_id).await?;
        let history = self.manifests.history(config.organization_id).await?;
        Ok(ManifestState {
            organization_id: config.organization_id,
            history: history.as_ref().clone(),
        })
    }

    /// Detach and delete the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal task cannot be started.
    pub async fn delete(&self, organization: OrganizationId) -> Result<(), Error<S::Error>> {
        self.manifests.delete(organization).await
    }

    /// Read a manifest attached elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when the organization does not exist.
    pub async fn import(
        &self,
        organization: OrganizationId,
    ) -> Result<ManifestState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(organization).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "subscription manifest",
                id: *organization.inner(),
            }),
        }
    }
}
