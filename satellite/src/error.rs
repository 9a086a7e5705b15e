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

//! Errors of the typed layer.
//!
//! [`Error`] is generic over the transport error `E` so the same resource
//! code runs against the HTTP client and the test mock. Transport failures
//! travel verbatim inside [`Error::Api`]; everything else is raised locally,
//! before any mutating call goes out.

use base64::DecodeError;
use rh_satellite_core::NotFoundError;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

#[derive(Debug)]
pub enum Error<E> {
    /// Transport or server failure, propagated unchanged.
    Api(E),
    /// An entity addressed by id does not exist on the server. Raised by
    /// `import` operations; plain reads report absence as `Ok(None)` instead.
    Gone {
        kind: &'static str,
        id: u64,
    },
    /// A lookup matched nothing.
    NoMatch {
        kind: &'static str,
        search: Option<String>,
    },
    /// A lookup matched more than one entity.
    Ambiguous {
        kind: &'static str,
        search: Option<String>,
        count: usize,
    },
    /// A permission name is not valid for the filter's resource type.
    InvalidPermission {
        name: String,
        resource_type: String,
    },
    /// A filter resource type outside the known Foreman set.
    UnknownResourceType(String),
    /// Organization scoping requested on a Location-typed filter.
    OrganizationIdsOnLocationFilter,
    /// A required string field was empty.
    EmptyField(&'static str),
    /// The supplied subscription manifest is not valid base64.
    BadManifest(DecodeError),
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Api(err) => write!(f, "API request failed: {err}"),
            Self::Gone { kind, id } => write!(f, "{kind} {id} not found"),
            Self::NoMatch {
                kind,
                search: Some(search),
            } => {
                write!(f, "no {kind} found for search string {search}")
            }
            Self::NoMatch { kind, search: None } => write!(f, "no {kind} found"),
            Self::Ambiguous {
                kind,
                search: Some(search),
                count,
            } => {
                write!(f, "{count} {kind} found for search string {search}")
            }
            Self::Ambiguous {
                kind,
                search: None,
                count,
            } => {
                write!(f, "{count} {kind} found, adjust arguments so only 1 is returned")
            }
            Self::InvalidPermission {
                name,
                resource_type,
            } => {
                write!(
                    f,
                    "{name} is not a valid permission for resource type {resource_type}"
                )
            }
            Self::UnknownResourceType(resource_type) => {
                write!(f, "unknown resource type {resource_type}")
            }
            Self::OrganizationIdsOnLocationFilter => {
                write!(
                    f,
                    "organization_ids cannot be specified for a resource_type of Location"
                )
            }
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::BadManifest(err) => write!(f, "manifest is not valid base64: {err}"),
        }
    }
}

impl<E: StdError + 'static> StdError for Error<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::BadManifest(err) => Some(err),
            _ => None,
        }
    }
}

impl<E: NotFoundError> Error<E> {
    /// True when the wrapped transport error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_not_found())
    }
}
