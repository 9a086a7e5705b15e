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

//! Typed client and declarative resource management for Red Hat
//! Satellite.
//!
//! The crate is layered:
//! - Entity modules ([`organization`], [`role`], [`activation_key`], ...)
//!   type the wire format of one API collection each and expose its raw
//!   calls through [`SatelliteClient`].
//! - The [`resource`] module manages one entity instance declaratively:
//!   a typed `...Config` describes the desired shape, every operation
//!   returns the observed `...State`, and updates send only what
//!   changed.
//! - [`reconcile`](reconcile()) computes bulk membership edits for the
//!   association sets (host collections on an activation key,
//!   permissions on a filter).
//!
//! Everything is generic over the [`Satellite`] transport trait, so the
//! same code runs against the HTTP client (`rh-satellite-api-http`,
//! wired up by [`ProviderConfig`]'s `connect` behind the `http` feature)
//! and the test mock (`rh-satellite-api-mock`).
//!
//! [`Satellite`]: rh_satellite_core::Satellite

pub mod activation_key;
pub mod auth_source;
pub mod client;
pub mod config;
pub mod content_view;
pub mod error;
pub mod external_user_group;
pub mod filter;
pub mod host_collection;
pub mod lifecycle_environment;
pub mod location;
mod lookup;
pub mod organization;
pub mod permission;
pub mod product;
pub mod reconcile;
pub mod resource;
pub mod role;
pub mod subscription;
pub mod user_group;

#[doc(inline)]
pub use activation_key::ActivationKeyId;
#[doc(inline)]
pub use auth_source::AuthSourceId;
#[doc(inline)]
pub use client::SatelliteClient;
#[doc(inline)]
pub use config::ConfigError;
#[cfg(feature = "http")]
#[doc(inline)]
pub use config::ConnectError;
#[doc(inline)]
pub use config::ProviderConfig;
#[doc(inline)]
pub use content_view::ContentViewId;
#[doc(inline)]
pub use content_view::RepositoryId;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use external_user_group::ExternalUserGroupId;
#[doc(inline)]
pub use filter::FilterId;
#[doc(inline)]
pub use host_collection::HostCollectionId;
#[doc(inline)]
pub use lifecycle_environment::LifecycleEnvironmentId;
#[doc(inline)]
pub use location::LocationId;
#[doc(inline)]
pub use organization::OrganizationId;
#[doc(inline)]
pub use permission::PermissionId;
#[doc(inline)]
pub use product::ProductId;
#[doc(inline)]
pub use reconcile::reconcile;
#[doc(inline)]
pub use reconcile::Reconciliation;
#[doc(inline)]
pub use role::RoleId;
#[doc(inline)]
pub use user_group::UserGroupId;
