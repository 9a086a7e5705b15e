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

//! LDAP authentication sources. These are managed outside this crate and
//! only looked up, typically to feed an
//! [external user group](crate::external_user_group).

use crate::lookup;
use crate::Error;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// Auth source identifier.
pub type AuthSourceId = TaggedType<u64, AuthSourceIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum AuthSourceIdTag {}

/// LDAP auth source as returned by the API. The `attr_*` fields name
/// LDAP attributes and are all strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSourceLdap {
    pub id: AuthSourceId,
    pub name: Option<String>,
    pub account: Option<String>,
    pub attr_firstname: Option<String>,
    pub attr_lastname: Option<String>,
    pub attr_login: Option<String>,
    pub attr_mail: Option<String>,
    pub attr_photo: Option<String>,
    pub base_dn: Option<String>,
    pub groups_base: Option<String>,
    pub host: Option<String>,
    pub ldap_filter: Option<String>,
    pub onthefly_register: Option<bool>,
    pub port: Option<u16>,
    pub server_type: Option<String>,
    pub tls: Option<bool>,
    pub r#type: Option<String>,
    pub use_netgroups: Option<bool>,
    pub usergroup_sync: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Abbreviated auth source reference embedded in other entities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSourceRef {
    pub id: AuthSourceId,
    pub name: Option<String>,
    pub r#type: Option<String>,
}

/// Access to the LDAP auth sources collection.
pub struct AuthSourceLdaps<S> {
    satellite: Arc<S>,
}

impl<S> Clone for AuthSourceLdaps<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> AuthSourceLdaps<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::foreman("auth_source_ldaps")
    }

    /// List LDAP auth sources matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<AuthSourceLdap>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one LDAP auth source by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: AuthSourceId) -> Result<Arc<AuthSourceLdap>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Find exactly one LDAP auth source by scoped-search string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when nothing matches and
    /// [`Error::Ambiguous`] when more than one auth source does.
    pub async fn find(&self, search: &str) -> Result<AuthSourceLdap, Error<S::Error>> {
        if search.is_empty() {
            return Err(Error::EmptyField("search"));
        }
        let listing = self.list(&SearchQuery::new().search(search)).await?;
        lookup::one_of(&listing.results, "LDAP auth sources", Some(search))
    }
}
