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

//! Lifecycle environments. Environments form a promotion chain from the
//! Library onward; they are managed outside this crate and only looked
//! up, usually to pin an [activation key](crate::activation_key).

use crate::lookup;
use crate::organization::OrganizationRef;
use crate::Error;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Lifecycle environment identifier.
pub type LifecycleEnvironmentId = TaggedType<u64, LifecycleEnvironmentIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum LifecycleEnvironmentIdTag {}

/// Lifecycle environment as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifecycleEnvironment {
    pub id: LifecycleEnvironmentId,
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    /// True for the Library environment at the head of the chain.
    pub library: Option<bool>,
    pub organization_id: Option<OrganizationId>,
    pub organization: Option<OrganizationRef>,
    pub prior: Option<LifecycleEnvironmentRef>,
    pub successor: Option<LifecycleEnvironmentRef>,
    pub counts: Option<LifecycleEnvironmentCounts>,
    pub permissions: Option<LifecycleEnvironmentPermissions>,
    pub registry_name_pattern: Option<String>,
    pub registry_unauthenticated_pull: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Abbreviated lifecycle environment reference embedded in other
/// entities and in the `prior`/`successor` links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifecycleEnvironmentRef {
    pub id: LifecycleEnvironmentId,
    pub name: Option<String>,
    pub label: Option<String>,
}

/// Per-content-type tallies of a lifecycle environment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifecycleEnvironmentCounts {
    pub content_hosts: Option<u64>,
    pub content_views: Option<u64>,
    pub docker_repositories: Option<u64>,
    pub module_streams: Option<u64>,
    pub ostree_repositories: Option<u64>,
    pub packages: Option<u64>,
    pub products: Option<u64>,
    pub puppet_modules: Option<u64>,
    pub yum_repositories: Option<u64>,
    pub errata: Option<ErrataCounts>,
}

/// Errata tallies by severity class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrataCounts {
    pub security: Option<u64>,
    pub bugfix: Option<u64>,
    pub enhancement: Option<u64>,
    pub total: Option<u64>,
}

/// What the calling user may do with a lifecycle environment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifecycleEnvironmentPermissions {
    pub create_lifecycle_environments: Option<bool>,
    pub destroy_lifecycle_environments: Option<bool>,
    pub edit_lifecycle_environments: Option<bool>,
    pub promote_or_remove_content_views_to_environments: Option<bool>,
    pub view_lifecycle_environments: Option<bool>,
}

/// Filters narrowing a lifecycle environment lookup. Unset fields do
/// not constrain the result.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LifecycleEnvironmentFilter {
    pub name: Option<String>,
    pub organization_id: Option<OrganizationId>,
    pub search: Option<String>,
}

impl LifecycleEnvironmentFilter {
    fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new();
        if let Some(name) = &self.name {
            query = query.param("name", name);
        }
        if let Some(organization_id) = self.organization_id {
            query = query.param("organization_id", organization_id);
        }
        if let Some(search) = &self.search {
            query = query.search(search.clone());
        }
        query
    }
}

/// Access to the lifecycle environments collection.
pub struct LifecycleEnvironments<S> {
    satellite: Arc<S>,
}

impl<S> Clone for LifecycleEnvironments<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> LifecycleEnvironments<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::katello("environments")
    }

    /// List lifecycle environments matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<LifecycleEnvironment>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one lifecycle environment by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(
        &self,
        id: LifecycleEnvironmentId,
    ) -> Result<Arc<LifecycleEnvironment>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Find exactly one lifecycle environment matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when nothing matches and
    /// [`Error::Ambiguous`] when the filter is not narrow enough.
    pub async fn find(
        &self,
        filter: &LifecycleEnvironmentFilter,
    ) -> Result<LifecycleEnvironment, Error<S::Error>> {
        let listing = self.list(&filter.to_query()).await?;
        lookup::one_of(&listing.results, "lifecycle environments", None)
    }
}
