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

//! Listing query builder
//!
//! Satellite listing endpoints take their parameters as a query string: the
//! scoped-search expression (`search`), pagination (`page`, `per_page`), and
//! per-endpoint filters such as `organization_id` or `red_hat_only`.
//! [`SearchQuery`] collects the pairs and renders them percent-encoded.
//!
//! Example
//! ```rust
//! use rh_satellite_core::SearchQuery;
//!
//! let query = SearchQuery::new()
//!     .search("resource_type=Host")
//!     .per_page(400);
//! assert_eq!(query.to_query_string(), "search=resource_type%3DHost&per_page=400");
//! ```

use core::fmt::Display;
use url::form_urlencoded::Serializer;

/// Builder for the query string of a listing call.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scoped-search expression (`search=...`).
    #[must_use]
    pub fn search(self, value: impl Into<String>) -> Self {
        self.param("search", value.into())
    }

    /// Request a specific result page.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Set the page size.
    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.param("per_page", per_page)
    }

    /// Append an arbitrary parameter. Repeating a name yields repeated
    /// pairs, which is how array parameters (`without[]`) are expressed.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// True if no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the pairs as a percent-encoded query string, in insertion
    /// order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}
