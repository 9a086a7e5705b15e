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

//! Subscription manifests. A manifest is a zip file exported from Red
//! Hat Subscription Management and attached to one organization:
//!
//! - the manifest itself can never be read back, only its operation
//!   history;
//! - upload, refresh and removal all run as server tasks whose records
//!   are discarded here;
//! - everything is addressed through the owning organization, there is
//!   no manifest id of its own.

use crate::Error;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::Empty;
use rh_satellite_core::Satellite;
use serde::Deserialize;
use std::sync::Arc;

/// One entry of a manifest's operation history. The entry id is a
/// Candlepin identifier and a string, unlike the numeric Satellite ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestHistory {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "statusMessage")]
    pub status_message: Option<String>,
    pub created: Option<String>,
}

/// Access to the subscription manifest of each organization.
pub struct Manifests<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Manifests<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Manifests<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root(organization: OrganizationId) -> ApiPath {
        ApiPath::katello("organizations")
            .join(organization)
            .join("subscriptions")
    }

    /// Upload a manifest zip into `organization`, replacing any manifest
    /// already attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the upload.
    pub async fn upload(
        &self,
        organization: OrganizationId,
        manifest: Vec<u8>,
    ) -> Result<(), Error<S::Error>> {
        self.satellite
            .upload::<Empty>(
                &Self::root(organization).join("upload"),
                "manifest.zip",
                manifest,
            )
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// Refresh the attached manifest from Red Hat Subscription
    /// Management.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh task cannot be started.
    pub async fn refresh(&self, organization: OrganizationId) -> Result<(), Error<S::Error>> {
        self.satellite
            .update::<_, Empty>(
                &Self::root(organization).join("refresh_manifest"),
                &Empty {},
            )
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// Detach and delete the manifest of `organization`.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal task cannot be started.
    pub async fn delete(&self, organization: OrganizationId) -> Result<(), Error<S::Error>> {
        self.satellite
            .create::<_, Empty>(
                &Self::root(organization).join("delete_manifest"),
                &Empty {},
            )
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// The operation history of the manifest of `organization`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn history(
        &self,
        organization: OrganizationId,
    ) -> Result<Arc<Vec<ManifestHistory>>, Error<S::Error>> {
        self.satellite
            .get(&Self::root(organization).join("manifest_history"))
            .await
            .map_err(Error::Api)
    }
}
