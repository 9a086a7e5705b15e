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

//! Products. Products arrive through the subscription
//! [manifest](crate::subscription) or are created in the web UI; this
//! crate only lists them.

use crate::Error;
use crate::OrganizationId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Product identifier.
pub type ProductId = TaggedType<u64, ProductIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ProductIdTag {}

/// Product as returned by the API. `cp_id` is the Candlepin identifier,
/// a string even for Red Hat products with numeric ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub cp_id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub gpg_key_id: Option<u64>,
    pub provider_id: Option<u64>,
    pub repository_count: Option<u64>,
    pub last_sync: Option<String>,
    pub last_sync_words: Option<String>,
}

/// Filters narrowing a product listing. Unset fields do not constrain
/// the result.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductFilter {
    pub organization_id: Option<OrganizationId>,
    pub red_hat_only: Option<bool>,
    pub name: Option<String>,
}

impl ProductFilter {
    fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new();
        if let Some(organization_id) = self.organization_id {
            query = query.param("organization_id", organization_id);
        }
        if let Some(red_hat_only) = self.red_hat_only {
            query = query.param("red_hat_only", red_hat_only);
        }
        if let Some(name) = &self.name {
            query = query.param("name", name);
        }
        query
    }
}

/// Access to the products collection.
pub struct Products<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Products<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Products<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::katello("products")
    }

    /// List products matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<Product>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// List the products matching `filter`. Unlike the single-entity
    /// lookups this returns every match.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn find(&self, filter: &ProductFilter) -> Result<Vec<Product>, Error<S::Error>> {
        let listing = self.list(&filter.to_query()).await?;
        Ok(listing.results.clone())
    }
}
