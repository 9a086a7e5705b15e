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

//! Content views. Managed through the Satellite web UI or hammer and
//! only looked up here, usually to pin an
//! [activation key](crate::activation_key) to a view.

use crate::activation_key::ActivationKeyRef;
use crate::lifecycle_environment::LifecycleEnvironmentRef;
use crate::lookup;
use crate::organization::OrganizationRef;
use crate::Error;
use crate::LifecycleEnvironmentId;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Content view identifier.
pub type ContentViewId = TaggedType<u64, ContentViewIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ContentViewIdTag {}

/// Repository identifier.
pub type RepositoryId = TaggedType<u64, RepositoryIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum RepositoryIdTag {}

/// Content view as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentView {
    pub id: ContentViewId,
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub composite: Option<bool>,
    pub default: Option<bool>,
    pub auto_publish: Option<bool>,
    pub solve_dependencies: Option<bool>,
    pub force_puppet_environment: Option<bool>,
    pub organization_id: Option<OrganizationId>,
    pub organization: Option<OrganizationRef>,
    /// Ids of the content view versions a composite view is built from.
    #[serde(default)]
    pub component_ids: Vec<u64>,
    #[serde(default)]
    pub repository_ids: Vec<RepositoryId>,
    #[serde(default)]
    pub repositories: Vec<RepositoryRef>,
    #[serde(default)]
    pub environments: Vec<LifecycleEnvironmentRef>,
    #[serde(default)]
    pub activation_keys: Vec<ActivationKeyRef>,
    #[serde(default)]
    pub versions: Vec<ContentViewVersionRef>,
    pub version_count: Option<u64>,
    pub latest_version: Option<String>,
    pub next_version: Option<String>,
    pub last_published: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Repository reference embedded in a content view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepositoryRef {
    pub id: RepositoryId,
    pub name: Option<String>,
    pub label: Option<String>,
    pub content_type: Option<String>,
}

/// Published version reference embedded in a content view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentViewVersionRef {
    pub id: u64,
    pub version: Option<String>,
    pub published: Option<String>,
    #[serde(default)]
    pub environment_ids: Vec<LifecycleEnvironmentId>,
}

/// Filters narrowing a content view lookup. Unset fields do not
/// constrain the result.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContentViewFilter {
    pub composite: Option<bool>,
    pub noncomposite: Option<bool>,
    pub nondefault: Option<bool>,
    pub environment_id: Option<LifecycleEnvironmentId>,
    pub organization_id: Option<OrganizationId>,
    pub name: Option<String>,
    pub search: Option<String>,
    /// Content view names to exclude from the result.
    pub without: Vec<String>,
}

impl ContentViewFilter {
    fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new();
        if let Some(composite) = self.composite {
            query = query.param("composite", composite);
        }
        if let Some(noncomposite) = self.noncomposite {
            query = query.param("noncomposite", noncomposite);
        }
        if let Some(nondefault) = self.nondefault {
            query = query.param("nondefault", nondefault);
        }
        if let Some(environment_id) = self.environment_id {
            query = query.param("environment_id", environment_id);
        }
        if let Some(organization_id) = self.organization_id {
            query = query.param("organization_id", organization_id);
        }
        if let Some(name) = &self.name {
            query = query.param("name", name);
        }
        if let Some(search) = &self.search {
            query = query.search(search.clone());
        }
        for without in &self.without {
            query = query.param("without[]", without);
        }
        query
    }
}

/// Access to the content views collection.
pub struct ContentViews<S> {
    satellite: Arc<S>,
}

impl<S> Clone for ContentViews<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> ContentViews<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::katello("content_views")
    }

    /// List content views matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<ContentView>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one content view by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: ContentViewId) -> Result<Arc<ContentView>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Find exactly one content view matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when nothing matches and
    /// [`Error::Ambiguous`] when the filter is not narrow enough.
    pub async fn find(&self, filter: &ContentViewFilter) -> Result<ContentView, Error<S::Error>> {
        let listing = self.list(&filter.to_query()).await?;
        lookup::one_of(&listing.results, "content views", None)
    }
}
