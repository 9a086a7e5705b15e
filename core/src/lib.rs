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

//! Core abstractions for talking to a Red Hat Satellite server.
//!
//! This crate defines the transport-agnostic [`Satellite`] trait together with
//! the value types every transport shares:
//! - [`ApiPath`]: a normalized API path under the Foreman (`/api`) or Katello
//!   (`/katello/api`) root.
//! - [`SearchQuery`]: builder for the `search`/`page`/`per_page` listing
//!   parameters.
//! - [`ListResult`]: the pagination envelope every listing endpoint returns.
//! - [`Empty`]: result of calls whose response body carries no information.
//! - [`NotFoundError`]: capability trait transports implement so callers can
//!   recognize a missing remote resource without depending on a concrete
//!   error type.
//!
//! Concrete transports live in sibling crates: `rh-satellite-api-http` for
//! the real HTTP client and `rh-satellite-api-mock` for tests.

pub mod list;
pub mod path;
pub mod satellite;
pub mod search;

#[doc(inline)]
pub use list::ListResult;
#[doc(inline)]
pub use path::ApiPath;
#[doc(inline)]
pub use satellite::Empty;
#[doc(inline)]
pub use satellite::NotFoundError;
#[doc(inline)]
pub use satellite::Satellite;
#[doc(inline)]
pub use search::SearchQuery;
