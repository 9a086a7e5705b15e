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

//! Locations. Locations nest through `parent_id`.

use crate::lookup;
use crate::Error;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Location identifier.
pub type LocationId = TaggedType<u64, LocationIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum LocationIdTag {}

/// Location as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<LocationId>,
    pub parent_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Abbreviated location reference embedded in other entities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRef {
    pub id: LocationId,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Fields accepted by location create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<LocationId>,
}

#[derive(Serialize)]
struct LocationBody<'a> {
    location: &'a LocationPayload,
}

/// Access to the locations collection.
pub struct Locations<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Locations<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Locations<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::foreman("locations")
    }

    /// List locations matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<Location>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one location by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: LocationId) -> Result<Arc<Location>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(&self, payload: &LocationPayload) -> Result<Location, Error<S::Error>> {
        self.satellite
            .create(&Self::root(), &LocationBody { location: payload })
            .await
            .map_err(Error::Api)
    }

    /// Update a location. Only the payload's `Some` fields change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: LocationId,
        payload: &LocationPayload,
    ) -> Result<Location, Error<S::Error>> {
        self.satellite
            .update(&Self::root().join(id), &LocationBody { location: payload })
            .await
            .map_err(Error::Api)
    }

    /// Delete a location.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: LocationId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }

    /// Find exactly one location by scoped-search string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when nothing matches and
    /// [`Error::Ambiguous`] when more than one location does.
    pub async fn find(&self, search: &str) -> Result<Location, Error<S::Error>> {
        if search.is_empty() {
            return Err(Error::EmptyField("search"));
        }
        let listing = self.list(&SearchQuery::new().search(search)).await?;
        lookup::one_of(&listing.results, "locations", Some(search))
    }
}
