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

//! Entry point of the typed layer
//!
//! [`SatelliteClient`] wraps one transport and hands out a typed handle
//! per API collection. Handles share the transport through an [`Arc`],
//! so the client and every handle clone cheaply.

use crate::activation_key::ActivationKeys;
use crate::auth_source::AuthSourceLdaps;
use crate::content_view::ContentViews;
use crate::external_user_group::ExternalUserGroups;
use crate::filter::Filters;
use crate::host_collection::HostCollections;
use crate::lifecycle_environment::LifecycleEnvironments;
use crate::location::Locations;
use crate::organization::Organizations;
use crate::permission::Permissions;
use crate::product::Products;
use crate::role::Roles;
use crate::subscription::Manifests;
use crate::user_group::UserGroups;
use rh_satellite_core::Satellite;
use std::sync::Arc;

/// Typed client over one Satellite API transport.
pub struct SatelliteClient<S> {
    satellite: Arc<S>,
}

impl<S> Clone for SatelliteClient<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> SatelliteClient<S> {
    /// Wrap a transport. Accepts the transport by value or an already
    /// shared `Arc<S>`.
    pub fn new(satellite: impl Into<Arc<S>>) -> Self {
        Self {
            satellite: satellite.into(),
        }
    }

    #[must_use]
    pub fn organizations(&self) -> Organizations<S> {
        Organizations::new(self.satellite.clone())
    }

    #[must_use]
    pub fn locations(&self) -> Locations<S> {
        Locations::new(self.satellite.clone())
    }

    #[must_use]
    pub fn roles(&self) -> Roles<S> {
        Roles::new(self.satellite.clone())
    }

    #[must_use]
    pub fn permissions(&self) -> Permissions<S> {
        Permissions::new(self.satellite.clone())
    }

    #[must_use]
    pub fn filters(&self) -> Filters<S> {
        Filters::new(self.satellite.clone())
    }

    #[must_use]
    pub fn user_groups(&self) -> UserGroups<S> {
        UserGroups::new(self.satellite.clone())
    }

    #[must_use]
    pub fn external_user_groups(&self) -> ExternalUserGroups<S> {
        ExternalUserGroups::new(self.satellite.clone())
    }

    #[must_use]
    pub fn auth_source_ldaps(&self) -> AuthSourceLdaps<S> {
        AuthSourceLdaps::new(self.satellite.clone())
    }

    #[must_use]
    pub fn activation_keys(&self) -> ActivationKeys<S> {
        ActivationKeys::new(self.satellite.clone())
    }

    #[must_use]
    pub fn host_collections(&self) -> HostCollections<S> {
        HostCollections::new(self.satellite.clone())
    }

    #[must_use]
    pub fn content_views(&self) -> ContentViews<S> {
        ContentViews::new(self.satellite.clone())
    }

    #[must_use]
    pub fn lifecycle_environments(&self) -> LifecycleEnvironments<S> {
        LifecycleEnvironments::new(self.satellite.clone())
    }

    #[must_use]
    pub fn products(&self) -> Products<S> {
        Products::new(self.satellite.clone())
    }

    #[must_use]
    pub fn manifests(&self) -> Manifests<S> {
        Manifests::new(self.satellite.clone())
    }
}
