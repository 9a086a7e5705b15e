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

//! API paths used throughout the typed layer
//!
//! [`ApiPath`] is the canonical address of a Satellite API document: an
//! opaque, already-normalized path string under one of the two API roots.
//!
//! Notes
//! - Satellite is two API families behind one host: Foreman owns
//!   infrastructure entities under `/api`, Katello owns content entities
//!   under `/katello/api`. [`ApiPath::foreman`] and [`ApiPath::katello`]
//!   build the respective forms.
//! - The type is intentionally semantic-unaware; it does not validate
//!   content. Formatting/Display returns the raw underlying string.
//!
//! Example
//! ```rust
//! use rh_satellite_core::ApiPath;
//!
//! let roles = ApiPath::foreman("roles");
//! assert_eq!(roles.to_string(), "/api/roles");
//! assert_eq!(roles.join(42).to_string(), "/api/roles/42");
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;

/// Normalized path of a Satellite API document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ApiPath(String);

impl ApiPath {
    /// Path under the Foreman root, e.g. `/api/roles`.
    #[must_use]
    pub fn foreman(resource: &str) -> Self {
        Self(format!("/api/{resource}"))
    }

    /// Path under the Katello root, e.g. `/katello/api/activation_keys`.
    #[must_use]
    pub fn katello(resource: &str) -> Self {
        Self(format!("/katello/api/{resource}"))
    }

    /// Append one path segment (an id or a sub-resource name).
    #[must_use]
    pub fn join(&self, segment: impl Display) -> Self {
        Self(format!("{}/{segment}", self.0))
    }

    /// The raw path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for ApiPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}
