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

//! Satellite server client abstraction
//!
//! This module defines the transport-agnostic [`Satellite`] trait — a minimal
//! interface for driving the Satellite REST API. Implementors provide
//! asynchronous operations to fetch and list entities, create/update/delete
//! them, and upload multipart content (subscription manifests).
//!
//! Key concepts:
//! - Entity identity: every call is addressed by an [`crate::ApiPath`], the
//!   normalized path under the Foreman or Katello API root.
//! - Arc-based sharing: read operations return `Arc<T>` so fetched documents
//!   can be shared cheaply while staying immutable.
//! - Body wrapping: Foreman endpoints expect request bodies wrapped in a
//!   single-key object naming the entity; that wrapping is the caller's
//!   concern, the transport ships whatever serializes.
//!
//! Operation semantics:
//! - `get` fetches the document at the given path.
//! - `search` fetches with the listing query string appended (callers
//!   usually deserialize into [`crate::ListResult`]).
//! - `create` performs a POST and returns the server's representation.
//! - `update` performs a PUT and returns the updated representation.
//! - `delete` removes the entity; response bodies are discarded.
//! - `upload` performs a multipart POST with the payload attached under the
//!   `content` part using the supplied file name.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures to support use in
//!   async runtimes and multithreaded contexts.
//! - No retries and no client-side caching: one call, one request.
//! - Errors should implement `std::error::Error` and, where the transport
//!   can observe HTTP statuses, [`NotFoundError`] so callers can treat a
//!   vanished resource as an absence instead of a failure.

use crate::ApiPath;
use crate::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;

/// Result of operations whose response body carries no information.
///
/// Deserializes from any JSON object, dropping all fields. Endpoints that
/// answer with a server task record use this to discard the body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Trait for transport errors that can indicate a missing remote resource.
///
/// A read that fails with `is_not_found() == true` means the entity is gone
/// from the server; callers translate that into an absence rather than an
/// error.
pub trait NotFoundError {
    /// Returns true if this error represents an HTTP 404 for the requested
    /// path.
    fn is_not_found(&self) -> bool;
}

/// Satellite trait defines access to a Red Hat Satellite server through its
/// REST API.
pub trait Satellite: Send + Sync {
    /// Transport error.
    type Error: StdError + Send + Sync;

    /// Get the document at the given path.
    ///
    /// `T` is structure that is used for return type.
    fn get<T: Sized + for<'a> Deserialize<'a> + 'static + Send + Sync>(
        &self,
        path: &ApiPath,
    ) -> impl Future<Output = Result<Arc<T>, Self::Error>> + Send;

    /// Get the document at the given path with a listing query appended.
    ///
    /// `T` is structure that is used for return type.
    fn search<T: Sized + for<'a> Deserialize<'a> + 'static + Send + Sync>(
        &self,
        path: &ApiPath,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Arc<T>, Self::Error>> + Send;

    /// Create an entity under the given path.
    ///
    /// `V` is structure that is used for create.
    /// `R` is structure that is used for return type.
    fn create<V: Sync + Send + Serialize, R: Send + Sync + Sized + for<'a> Deserialize<'a>>(
        &self,
        path: &ApiPath,
        body: &V,
    ) -> impl Future<Output = Result<R, Self::Error>> + Send;

    /// Update the entity at the given path.
    ///
    /// `V` is structure that is used for update.
    /// `R` is structure that is used for return type (updated entity).
    fn update<V: Sync + Send + Serialize, R: Send + Sync + Sized + for<'a> Deserialize<'a>>(
        &self,
        path: &ApiPath,
        body: &V,
    ) -> impl Future<Output = Result<R, Self::Error>> + Send;

    /// Delete the entity at the given path.
    fn delete(&self, path: &ApiPath) -> impl Future<Output = Result<Empty, Self::Error>> + Send;

    /// Upload a file as a multipart POST to the given path.
    ///
    /// `R` is structure that is used for return type.
    fn upload<R: Send + Sync + Sized + for<'a> Deserialize<'a>>(
        &self,
        path: &ApiPath,
        file_name: &str,
        content: Vec<u8>,
    ) -> impl Future<Output = Result<R, Self::Error>> + Send;
}
