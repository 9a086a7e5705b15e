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

//! Permission filters. A filter attaches a set of
//! [permissions](crate::permission) for one resource type to a
//! [role](crate::role):
//!
//! - the server derives `resource_type` from the permissions granted, so
//!   requests never carry it;
//! - responses spell the booleans `override?` and `unlimited?`, requests
//!   plain `override`;
//! - `unlimited` is computed by the server from the presence of `search`.

use crate::location::LocationRef;
use crate::organization::OrganizationRef;
use crate::permission::Permission;
use crate::role::RoleRef;
use crate::Error;
use crate::LocationId;
use crate::OrganizationId;
use crate::PermissionId;
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

/// Filter identifier.
pub type FilterId = TaggedType<u64, FilterIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum FilterIdTag {}

/// Resource types a filter can be scoped to. The empty string stands for
/// the miscellaneous permissions, which have no resource type.
pub const RESOURCE_TYPES: &[&str] = &[
    "",
    "AnsibleRole",
    "AnsibleVariable",
    "Architecture",
    "Audit",
    "AuthSource",
    "Bookmark",
    "ComputeProfile",
    "ComputeResource",
    "ConfigGroup",
    "ConfigReport",
    "DiscoveryRule",
    "Domain",
    "Environment",
    "ExternalUsergroup",
    "FactValue",
    "Filter",
    "ForemanOpenscap::ArfReport",
    "ForemanOpenscap::Policy",
    "ForemanOpenscap::ScapContent",
    "ForemanOpenscap::TailoringFile",
    "ForemanTasks::RecurringLogic",
    "ForemanTasks::Task",
    "ForemanVirtWhoConfigure::Config",
    "Host",
    "HostClass",
    "Hostgroup",
    "HttpProxy",
    "InsightsHit",
    "Image",
    "JobInvocation",
    "JobTemplate",
    "Katello::ActivationKey",
    "Katello::ContentView",
    "Katello::GpgKey",
    "Katello::HostCollection",
    "Katello::KTEnvironment",
    "Katello::Product",
    "Katello::Subscription",
    "Katello::SyncPlan",
    "KeyPair",
    "Location",
    "MailNotification",
    "Medium",
    "Model",
    "Operatingsystem",
    "Organization",
    "Parameter",
    "PersonalAccessToken",
    "ProvisioningTemplate",
    "Ptable",
    "Puppetclass",
    "PuppetclassLookupKey",
    "Realm",
    "RemoteExecutionFeature",
    "Report",
    "ReportTemplate",
    "Role",
    "Setting",
    "SmartProxy",
    "SshKey",
    "Subnet",
    "Template",
    "TemplateInvocation",
    "Trend",
    "User",
    "Usergroup",
    "VariableLookupKey",
];

/// Whether `resource_type` names a type filters can be scoped to.
#[must_use]
pub fn is_resource_type(resource_type: &str) -> bool {
    RESOURCE_TYPES.contains(&resource_type)
}

/// Filter as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Filter {
    pub id: FilterId,
    pub search: Option<String>,
    /// Null for filters over the miscellaneous permissions.
    pub resource_type: Option<String>,
    #[serde(rename = "override?")]
    pub r#override: Option<bool>,
    #[serde(rename = "unlimited?")]
    pub unlimited: Option<bool>,
    pub role: Option<RoleRef>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub locations: Vec<LocationRef>,
    #[serde(default)]
    pub organizations: Vec<OrganizationRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Fields accepted by filter create and update calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FilterPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<RoleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_ids: Option<Vec<PermissionId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<BTreeSet<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_ids: Option<BTreeSet<OrganizationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#override: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Serialize)]
struct FilterBody<'a> {
    filter: &'a FilterPayload,
}

/// Access to the filters collection.
pub struct Filters<S> {
    satellite: Arc<S>,
}

impl<S> Clone for Filters<S> {
    fn clone(&self) -> Self {
        Self {
            satellite: self.satellite.clone(),
        }
    }
}

impl<S: Satellite> Filters<S> {
    pub(crate) fn new(satellite: Arc<S>) -> Self {
        Self { satellite }
    }

    fn root() -> ApiPath {
        ApiPath::foreman("filters")
    }

    /// List filters matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing call fails.
    pub async fn list(
        &self,
        query: &SearchQuery,
    ) -> Result<Arc<ListResult<Filter>>, Error<S::Error>> {
        self.satellite
            .search(&Self::root(), query)
            .await
            .map_err(Error::Api)
    }

    /// Get one filter by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server responds with an error.
    pub async fn get(&self, id: FilterId) -> Result<Arc<Filter>, Error<S::Error>> {
        self.satellite
            .get(&Self::root().join(id))
            .await
            .map_err(Error::Api)
    }

    /// Create a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn create(&self, payload: &FilterPayload) -> Result<Filter, Error<S::Error>> {
        self.satellite
            .create(&Self::root(), &FilterBody { filter: payload })
            .await
            .map_err(Error::Api)
    }

    /// Update a filter. Only the payload's `Some` fields change.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the payload.
    pub async fn update(
        &self,
        id: FilterId,
        payload: &FilterPayload,
    ) -> Result<Filter, Error<S::Error>> {
        self.satellite
            .update(&Self::root().join(id), &FilterBody { filter: payload })
            .await
            .map_err(Error::Api)
    }

    /// Delete a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, id: FilterId) -> Result<(), Error<S::Error>> {
        self.satellite
            .delete(&Self::root().join(id))
            .await
            .map(|_| ())
            .map_err(Error::Api)
    }
}
