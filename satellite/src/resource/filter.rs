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

use crate::filter::is_resource_type;
use crate::filter::Filter;
use crate::filter::FilterPayload;
use crate::filter::Filters;
use crate::permission::Permission;
use crate::permission::Permissions;
use crate::reconcile::reconcile;
use crate::Error;
use crate::FilterId;
use crate::LocationId;
use crate::OrganizationId;
use crate::PermissionId;
use crate::RoleId;
use crate::SatelliteClient;
use rh_satellite_core::NotFoundError;
use rh_satellite_core::Satellite;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Desired configuration of a permission filter. Permissions are named,
/// not numbered; the configured names are resolved against the server's
/// permissions for `resource_type` before anything is sent. An empty
/// `resource_type` selects the miscellaneous permissions.
///
/// The owning role and the resource type are fixed at creation. Changing
/// either means replacing the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub role_id: RoleId,
    pub resource_type: String,
    pub permission_names: BTreeSet<String>,
    pub search: Option<String>,
    pub r#override: Option<bool>,
    pub location_ids: BTreeSet<LocationId>,
    pub organization_ids: BTreeSet<OrganizationId>,
}

impl FilterConfig {
    #[must_use]
    pub fn new(role_id: RoleId, resource_type: impl Into<String>) -> Self {
        Self {
            role_id,
            resource_type: resource_type.into(),
            permission_names: BTreeSet::new(),
            search: None,
            r#override: None,
            location_ids: BTreeSet::new(),
            organization_ids: BTreeSet::new(),
        }
    }
}

/// Observed state of a permission filter. The name and id sets are
/// derived from the references the server reports.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub id: FilterId,
    pub role_id: Option<RoleId>,
    pub resource_type: String,
    pub permission_names: BTreeSet<String>,
    pub permissions: Vec<Permission>,
    pub search: Option<String>,
    pub r#override: Option<bool>,
    pub unlimited: Option<bool>,
    pub location_ids: BTreeSet<LocationId>,
    pub organization_ids: BTreeSet<OrganizationId>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Manages one permission filter on a role.
pub struct FilterResource<S> {
    filters: Filters<S>,
    permissions: Permissions<S>,
}

impl<S> Clone for FilterResource<S> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            permissions: self.permissions.clone(),
        }
    }
}

impl<S: Satellite> FilterResource<S> {
    #[must_use]
    pub fn new(client: &SatelliteClient<S>) -> Self {
        Self {
            filters: client.filters(),
            permissions: client.permissions(),
        }
    }

    fn state(filter: &Filter) -> FilterState {
        FilterState {
            id: filter.id,
            role_id: filter.role.as_ref().map(|role| role.id),
            resource_type: filter.resource_type.clone().unwrap_or_default(),
            permission_names: filter
                .permissions
                .iter()
                .filter_map(|permission| permission.name.clone())
                .collect(),
            permissions: filter.permissions.clone(),
            search: filter.search.clone(),
            r#override: filter.r#override,
            unlimited: filter.unlimited,
            location_ids: filter
                .locations
                .iter()
                .map(|location| location.id)
                .collect(),
            organization_ids: filter
                .organizations
                .iter()
                .map(|organization| organization.id)
                .collect(),
            created_at: filter.created_at.clone(),
            updated_at: filter.updated_at.clone(),
        }
    }

    fn validate(config: &FilterConfig) -> Result<(), Error<S::Error>> {
        if !is_resource_type(&config.resource_type) {
            return Err(Error::UnknownResourceType(config.resource_type.clone()));
        }
        if config.resource_type == "Location" && !config.organization_ids.is_empty() {
            return Err(Error::OrganizationIdsOnLocationFilter);
        }
        Ok(())
    }

    /// Resolve configured permission names to server ids, in name order.
    async fn resolve_permission_ids(
        &self,
        resource_type: &str,
        names: &BTreeSet<String>,
    ) -> Result<Vec<PermissionId>, Error<S::Error>> {
        let available = self.permissions.for_resource_type(resource_type).await?;
        let mut by_name = BTreeMap::new();
        for permission in &available {
            if let Some(name) = &permission.name {
                by_name.insert(name.as_str(), permission.id);
            }
        }
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            match by_name.get(name.as_str()) {
                Some(id) => ids.push(*id),
                None => {
                    return Err(Error::InvalidPermission {
                        name: name.clone(),
                        resource_type: resource_type.to_owned(),
                    })
                }
            }
        }
        Ok(ids)
    }

    /// Create the filter and return its observed state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResourceType`],
    /// [`Error::OrganizationIdsOnLocationFilter`] or
    /// [`Error::InvalidPermission`] before anything is sent, otherwise an
    /// error if the server rejects the creation.
    pub async fn create(&self, config: &FilterConfig) -> Result<FilterState, Error<S::Error>> {
        Self::validate(config)?;
        let permission_ids = self
            .resolve_permission_ids(&config.resource_type, &config.permission_names)
            .await?;
        let mut payload = FilterPayload {
            role_id: Some(config.role_id),
            permission_ids: Some(permission_ids),
            search: config.search.clone(),
            r#override: config.r#override,
            ..FilterPayload::default()
        };
        if !config.location_ids.is_empty() {
            payload.location_ids = Some(config.location_ids.clone());
        }
        if !config.organization_ids.is_empty() {
            payload.organization_ids = Some(config.organization_ids.clone());
        }
        let created = self.filters.create(&payload).await?;
        let filter = self.filters.get(created.id).await?;
        Ok(Self::state(&filter))
    }

    /// Read the filter, or `None` when it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails for any reason other than the
    /// filter being gone.
    pub async fn read(&self, id: FilterId) -> Result<Option<FilterState>, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.filters.get(id).await {
            Ok(filter) => Ok(Some(Self::state(&filter))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Apply `config` on top of `prior`, sending only the changed fields
    /// and skipping the call when nothing changed. Permission names are
    /// resolved again only when their set actually changed; the full
    /// desired id list is then sent, since the server replaces the
    /// membership wholesale. An id set that changed to empty is sent as an
    /// empty list, clearing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResourceType`],
    /// [`Error::OrganizationIdsOnLocationFilter`] or
    /// [`Error::InvalidPermission`] before anything is sent, otherwise an
    /// error if the server rejects the update.
    pub async fn update(
        &self,
        id: FilterId,
        prior: &FilterState,
        config: &FilterConfig,
    ) -> Result<FilterState, Error<S::Error>> {
        Self::validate(config)?;
        let mut payload = FilterPayload::default();
        if !reconcile(&prior.permission_names, &config.permission_names).is_unchanged() {
            let permission_ids = self
                .resolve_permission_ids(&config.resource_type, &config.permission_names)
                .await?;
            payload.permission_ids = Some(permission_ids);
        }
        let desired_search = config.search.clone().unwrap_or_default();
        if prior.search.clone().unwrap_or_default() != desired_search {
            payload.search = Some(desired_search);
        }
        if let Some(r#override) = config.r#override {
            if prior.r#override != Some(r#override) {
                payload.r#override = Some(r#override);
            }
        }
        if config.location_ids != prior.location_ids {
            payload.location_ids = Some(config.location_ids.clone());
        }
        if config.organization_ids != prior.organization_ids {
            payload.organization_ids = Some(config.organization_ids.clone());
        }
        if payload != FilterPayload::default() {
            self.filters.update(id, &payload).await?;
        }
        let filter = self.filters.get(id).await?;
        Ok(Self::state(&filter))
    }

    /// Delete the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: FilterId) -> Result<(), Error<S::Error>> {
        self.filters.delete(id).await
    }

    /// Read a filter created elsewhere, for adoption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gone`] when no filter has this id.
    pub async fn import(&self, id: FilterId) -> Result<FilterState, Error<S::Error>>
    where
        S::Error: NotFoundError,
    {
        match self.read(id).await? {
            Some(state) => Ok(state),
            None => Err(Error::Gone {
                kind: "filter",
                id: *id.inner(),
            }),
        }
    }
}
