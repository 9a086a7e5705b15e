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

//! Declarative management of Satellite entities
//!
//! One resource per managed entity, each pairing a `Config` struct (the
//! desired values) with a `State` struct (the values observed on the
//! server). All resources follow the same contract:
//!
//! - `create(config)` validates, issues the mutations, then reads the
//!   entity back and returns its observed state;
//! - `read(id)` returns `Ok(None)` when the entity no longer exists, so
//!   callers can drop it from their records instead of failing;
//! - `update(id, prior, config)` sends only the fields whose desired
//!   value differs from `prior`, and skips the call entirely when
//!   nothing changed;
//! - `delete(id)` removes the entity;
//! - `import(id)` reads an entity created elsewhere and fails with
//!   [`Error::Gone`](crate::Error::Gone) when there is none.
//!
//! State is only ever built from a fresh read, never assembled out of
//! the request payload. Calls are not retried; the first error wins.

mod activation_key;
mod external_user_group;
mod filter;
mod host_collection;
mod location;
mod manifest;
mod organization;
mod role;
mod user_group;

pub use activation_key::ActivationKeyConfig;
pub use activation_key::ActivationKeyResource;
pub use activation_key::ActivationKeyState;
pub use external_user_group::ExternalUserGroupConfig;
pub use external_user_group::ExternalUserGroupResource;
pub use external_user_group::ExternalUserGroupState;
pub use filter::FilterConfig;
pub use filter::FilterResource;
pub use filter::FilterState;
pub use host_collection::HostCollectionConfig;
pub use host_collection::HostCollectionResource;
pub use host_collection::HostCollectionState;
pub use location::LocationConfig;
pub use location::LocationResource;
pub use location::LocationState;
pub use manifest::ManifestConfig;
pub use manifest::ManifestResource;
pub use manifest::ManifestState;
pub use organization::OrganizationConfig;
pub use organization::OrganizationResource;
pub use organization::OrganizationState;
pub use role::RoleConfig;
pub use role::RoleResource;
pub use role::RoleState;
pub use user_group::UserGroupConfig;
pub use user_group::UserGroupResource;
pub use user_group::UserGroupState;
