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

use crate::location::Location;
use crate::location::LocationPayload;
use crate::location::Locations;
use crate::Error;
use crate::LocationId;
use crate::SatelliteClient;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;

/// Desired configuration of a managed location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationConfig {
    pub name: String,
    pub description: Option<String>,
    /// Owning location when nesting; unset creates a top level location.
    pub parent_id: Option<LocationId>,
}

impl LocationConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parent_id: None,
        }
    }
}

/// Observed state of a managed location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationState {
    pub id: LocationId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<LocationId>,
}

/// Manages one location.
pub struct LocationResource<S> {
    locations: Locations<S>,
}

impl<S> Clone for LocationResource<S> {
    fn clone(&self) -> Self {
        Self {
            locations: self.locations.clone(),
        }
    }
}

impl<S: Satellite> LocationResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            locations: client.locations(),
        }
    }

    fn state(location: &Location) -> LocationState {
        LocationState {
            id: location.id,
            name: location.name.clone(),
            description: location.description.clone(),
            parent_id: location.parent_id,
        }
    }

    /// Create the location and return its observed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the creation.
    pub async fn create(&self, config: &LocationConfig) -> Result<LocationState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let payload = LocationPayload {
            name: Some(config.name.clone()),
            description: config.description.clone(),
            parent_id: config.parent_id,
        };
        let created = self.locations.create(&payload).await?;
        let location = self.locations.get(created.id).await?;
        Ok(Self::state(&location))
    }

    /// Read the location, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than
    /// the location being gone.
    pub async fn read(&self, id: LocationId) -> Result<Option<LocationState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.locations.get(id).await {
            Ok(location) => Ok(Some(Self::state(&location))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`, sending only the changed
    /// fields and skipping the call when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] when the name is empty, otherwise
    /// an error if the server rejects the update.
    pub async fn update(
        &self,
        id: LocationId,
        prior: &LocationState,
        config: &LocationConfig,
    ) -> Result<LocationState, Error<S::Error>> {
        if config.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }
        let mut payload = LocationPayload::default();
        if prior.name.as_deref() != Some(config.name.as_str()) {
            payload.name = Some(config.name.clone());
        }
        let description = config.description.clone().unwrap_or_default();
        if prior.description.clone().unwrap_or_default() != description {
            payload.description = Some(description);
        }
        if config.parent_id.is_some() && config.parent_id != prior.parent_id {
            payload.parent_id = config.parent_id;
        }
        if payload != LocationPayload::default() {
            self.locations.update(id, &payload).await?;
        }
        let location = self.locations.get(id).await?;
        Ok(Self::state(&location))
    }

    /// Delete the location.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: LocationId) -> Result<(), Error<S::Error>> {
        self.locations.delete(id).await
    }

    /// Read a location created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no location has this id.
    pub async fn import(&self, id: LocationId) -> Result<LocationState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "location",
                id: *id.inner(),
            }),
        }
    }
}
