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

//! External user groups. An external user group maps a group from an
//! [LDAP auth source](crate::auth_source) onto a local
//! [user group](crate::user_group). The collection is addressed under
//! its owning user group, so every call takes the owner's id.

use crate::auth_source::AuthSourceRef;
use crate::AuthSourceId;
use crate::Error;
use crate::UserGroupId;
use rh_satellite_core::ApiPath;
use rh_satellite_core::Satellite;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use tagged_types::TaggedType;

/// External user group identifier.
pub type ExternalUserGroupId = TaggedType<u64, ExternalUserGroupIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ExternalUserGroupIdTag {}

/// External user group as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalUserGroup {
    pub id: ExternalUserGroupId,
    pub name: Option<String>,
    pub auth_source_ldap: Option<AuthSourceRef>,
}

/// Fields accepted by external user group create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ExternalUserGroupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_source_id: Option<AuthSourceId>,
}

#[derive(Serialize)]
struct ExternalUserGroupBody<'a> {
    external_usergroup: &'a ExternalUserGroupPayload,
}

/// Access to the external user groups nested under user groups.
pub struct ExternalUserGroups<S> {
    satellite: Arc<S>,
}

impl<S> Clone for ExternalUserGroups<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> ExternalUserGroups<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root(user_group: UserGroupId) -> ApiPath {
        ApiPath::foreman("usergroups")
            .join(user_group)
            .join("external_usergroups")
    }

    /// Get one external user group of `user_group` by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(
        &self,
        user_group: UserGroupId,
        id: ExternalUserGroupId,
    ) -> Result<Arc<ExternalUserGroup>, Error<S::Error>> {
        self.satellite
            .get(&Self::root(user_group).join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create an external user group under `user_group`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(
        &self,
        user_group: UserGroupId,
        payload: &ExternalUserGroupPayload,
    ) -> Result<ExternalUserGroup, Error<S::Error>> {
        self.satellite
            .create(
                &Self::root(user_group),
                &ExternalUserGroupBody {
                    external_usergroup: payload,
                },
            )
            .await
            .map_err(Error::Api)
    }

    /// Update an external user group. Only the payload's `Some` fields
    /// change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        user_group: UserGroupId,
        id: ExternalUserGroupId,
        payload: &ExternalUserGroupPayload,
    ) -> Result<ExternalUserGroup, Error<S::Error>> {
        self.satellite
            .update(
                &Self::root(user_group).join(id),
                &ExternalUserGroupBody {
                    external_usergroup: payload,
                },
            )
            .await
            .map_err(Error::Api)
    }

    /// Delete an external user group.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(
        &self,
        user_group: UserGroupId,
        id: ExternalUserGroupId,
    ) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root(user_group).join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }
}
