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

//! User groups. Groups bundle [roles](crate::role) and can mirror an
//! LDAP group through an [external user group](crate::external_user_group).

use crate::role::RoleRef;
use crate::Error;
use crate::RoleId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::ListResult;
use rh_satellite_core::Satellite;
use rh_satellite_core::SearchQuery;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tagged_types::TaggedType;

/// User group identifier.
pub type UserGroupId = TaggedType<u64, UserGroupIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum UserGroupIdTag {}

/// User group as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserGroup {
    pub id: UserGroupId,
    pub name: Option<String>,
    pub admin: Option<bool>,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Fields accepted by user group create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct UserGroupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<BTreeSet<RoleId>>,
}

#[derive(Serialize)]
struct UserGroupBody<'a> {
    usergroup: &'a UserGroupPayload,
}

/// Access to the user groups collection.
pub struct UserGroups<S> {
    satellite: Arc<S>,
}

impl<S> Clone for UserGroups<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> UserGroups<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::foreman("usergroups")
    }

    /// List user groups matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<UserGroup>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one user group by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: UserGroupId) -> Result<Arc<UserGroup>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create a user group.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(&self, payload: &UserGroupPayload) -> Result<UserGroup, Error<S::Error>> {
        self.satellite
            .create(&Self::root(), &UserGroupBody { usergroup: payload })
            .await
            .map_err(Error::Api)
    }

    /// Update a user group. Only the payload's `Some` fields change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: UserGroupId,
        payload: &UserGroupPayload,
    ) -> Result<UserGroup, Error<S::Error>> {
        self.satellite
            .update(&Self::root().join(id), &UserGroupBody { usergroup: payload })
            .await
            .map_err(Error::Api)
    }

    /// Delete a user group.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: UserGroupId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }
}
