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

//! Integration tests of permission filter management. Filters are
//! configured with permission names, which are validated and resolved
//! to server ids before any mutation goes out.

use rh_satellite::resource::FilterConfig;
use rh_satellite::resource::FilterResource;
use rh_satellite::resource::FilterState;
use rh_satellite::FilterId;
use rh_satellite::LocationId;
use rh_satellite::OrganizationId;
use rh_satellite::RoleId;
use rh_satellite::SatelliteClient;
use rh_satellite_tests::Error;
use rh_satellite_tests::Expect;
use rh_satellite_tests::Satellite;
use serde_json::json;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::test;

// Creation resolves names against the permissions of the resource type,
// posts ids in name order, and reads the filter back.
#[test]
async fn filter_create_resolves_permission_names_before_posting() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    satellite.expect(Expect::search(
        "/api/permissions",
        "search=resource_type%3DArchitecture",
        architecture_permissions(),
    ));
    satellite.expect(Expect::create(
        "/api/filters",
        json!({"filter": {
            "role_id": 3,
            "permission_ids": [11, 10],
            "location_ids": [4],
            "search": "name ~ crate"
        }}),
        json!({"id": 21}),
    ));
    satellite.expect(Expect::get(
        "/api/filters/21",
        json!({
            "id": 21,
            "search": "name ~ crate",
            "resource_type": "Architecture",
            "override?": false,
            "unlimited?": false,
            "role": {"id": 3, "name": "Crate Curators"},
            "permissions": [
                {"id": 10, "name": "view_architectures", "resource_type": "Architecture"},
                {"id": 11, "name": "edit_architectures", "resource_type": "Architecture"}
            ],
            "locations": [{"id": 4, "name": "Berlin"}]
        }),
    ));

    let mut config = FilterConfig::new(RoleId::new(3), "Architecture");
    config.permission_names = names(&["view_architectures", "edit_architectures"]);
    config.search = Some("name ~ crate".to_string());
    config.location_ids = [LocationId::new(4)].iter().copied().collect();
    let state = resource.create(&config).await?;

    assert_eq!(state.id, FilterId::new(21));
    assert_eq!(state.role_id, Some(RoleId::new(3)));
    assert_eq!(state.resource_type, "Architecture");
    assert_eq!(
        state.permission_names,
        names(&["edit_architectures", "view_architectures"])
    );
    assert_eq!(state.unlimited, Some(false));
    Ok(())
}

// An empty resource type selects the miscellaneous permissions, which
// cannot be searched for and are filtered out of a plain listing.
#[test]
async fn filter_create_scopes_the_miscellaneous_permissions() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    satellite.expect(Expect::search(
        "/api/permissions",
        "per_page=400",
        json!({"results": [
            {"id": 40, "name": "access_dashboard"},
            {"id": 41, "name": "view_architectures", "resource_type": "Architecture"}
        ]}),
    ));
    satellite.expect(Expect::create(
        "/api/filters",
        json!({"filter": {"role_id": 3, "permission_ids": [40]}}),
        json!({"id": 22}),
    ));
    satellite.expect(Expect::get(
        "/api/filters/22",
        json!({
            "id": 22,
            "resource_type": null,
            "unlimited?": true,
            "permissions": [{"id": 40, "name": "access_dashboard"}]
        }),
    ));

    let mut config = FilterConfig::new(RoleId::new(3), "");
    config.permission_names = names(&["access_dashboard"]);
    let state = resource.create(&config).await?;

    assert_eq!(state.resource_type, "");
    assert_eq!(state.permission_names, names(&["access_dashboard"]));
    Ok(())
}

// An unknown resource type is rejected before any request goes out.
#[test]
async fn filter_create_rejects_an_unknown_resource_type() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    let result = resource
        .create(&FilterConfig::new(RoleId::new(3), "Widget"))
        .await;
    let err = result.err().expect("create must fail");
    assert!(matches!(&err, Error::UnknownResourceType(_)));
    assert_eq!(err.to_string(), "unknown resource type Widget");
    Ok(())
}

// Location filters scope themselves; organization scoping on them is
// rejected before any request goes out.
#[test]
async fn filter_create_rejects_organization_ids_on_location_filters() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    let mut config = FilterConfig::new(RoleId::new(3), "Location");
    config.organization_ids = [OrganizationId::new(1)].iter().copied().collect();
    let result = resource.create(&config).await;
    let err = result.err().expect("create must fail");
    assert_eq!(
        err.to_string(),
        "organization_ids cannot be specified for a resource_type of Location"
    );
    Ok(())
}

// A name outside the resource type's permissions fails resolution; the
// creation call is never issued.
#[test]
async fn filter_create_rejects_a_permission_foreign_to_the_type() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    satellite.expect(Expect::search(
        "/api/permissions",
        "search=resource_type%3DArchitecture",
        architecture_permissions(),
    ));

    let mut config = FilterConfig::new(RoleId::new(3), "Architecture");
    config.permission_names = names(&["make_coffee", "view_architectures"]);
    let result = resource.create(&config).await;
    let err = result.err().expect("create must fail");
    assert!(matches!(&err, Error::InvalidPermission { .. }));
    assert_eq!(
        err.to_string(),
        "make_coffee is not a valid permission for resource type Architecture"
    );
    Ok(())
}

// A changed permission set is resolved again and sent wholesale, since
// the server replaces the membership rather than merging it.
#[test]
async fn filter_update_resends_the_full_permission_list_on_change() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);
    let prior = read_curator_filter(&satellite, &resource).await?;

    satellite.expect(Expect::search(
        "/api/permissions",
        "search=resource_type%3DArchitecture",
        architecture_permissions(),
    ));
    satellite.expect(Expect::update(
        "/api/filters/21",
        json!({"filter": {"permission_ids": [11, 10]}}),
        json!({"id": 21}),
    ));
    satellite.expect(Expect::get(
        "/api/filters/21",
        json!({
            "id": 21,
            "resource_type": "Architecture",
            "override?": false,
            "unlimited?": true,
            "role": {"id": 3, "name": "Crate Curators"},
            "permissions": [
                {"id": 10, "name": "view_architectures", "resource_type": "Architecture"},
                {"id": 11, "name": "edit_architectures", "resource_type": "Architecture"}
            ],
            "locations": [{"id": 4, "name": "Berlin"}]
        }),
    ));

    let mut config = curator_config();
    config.permission_names = names(&["view_architectures", "edit_architectures"]);
    let state = resource.update(FilterId::new(21), &prior, &config).await?;
    assert_eq!(
        state.permission_names,
        names(&["edit_architectures", "view_architectures"])
    );
    Ok(())
}

// An unchanged permission set skips resolution entirely; only the
// changed scalar goes out.
#[test]
async fn filter_update_skips_resolution_when_membership_is_unchanged() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);
    let prior = read_curator_filter(&satellite, &resource).await?;

    satellite.expect(Expect::update(
        "/api/filters/21",
        json!({"filter": {"search": "name ~ crate"}}),
        json!({"id": 21}),
    ));
    satellite.expect(Expect::get("/api/filters/21", curator_filter_body()));

    let mut config = curator_config();
    config.search = Some("name ~ crate".to_string());
    resource.update(FilterId::new(21), &prior, &config).await?;
    Ok(())
}

// Desired values that already hold produce a refresh read and nothing
// else.
#[test]
async fn filter_update_skips_the_call_when_nothing_changed() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);
    let prior = read_curator_filter(&satellite, &resource).await?;

    satellite.expect(Expect::get("/api/filters/21", curator_filter_body()));

    let state = resource
        .update(FilterId::new(21), &prior, &curator_config())
        .await?;
    assert_eq!(state, prior);
    Ok(())
}

// Dropping the location scoping sends an explicit empty list, which
// clears it on the server.
#[test]
async fn filter_update_clears_dropped_location_scoping() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);
    let prior = read_curator_filter(&satellite, &resource).await?;

    satellite.expect(Expect::update(
        "/api/filters/21",
        json!({"filter": {"location_ids": []}}),
        json!({"id": 21}),
    ));
    satellite.expect(Expect::get(
        "/api/filters/21",
        json!({
            "id": 21,
            "resource_type": "Architecture",
            "override?": false,
            "unlimited?": true,
            "role": {"id": 3, "name": "Crate Curators"},
            "permissions": [
                {"id": 10, "name": "view_architectures", "resource_type": "Architecture"}
            ],
            "locations": []
        }),
    ));

    let mut config = curator_config();
    config.location_ids = BTreeSet::new();
    let state = resource.update(FilterId::new(21), &prior, &config).await?;
    assert!(state.location_ids.is_empty());
    Ok(())
}

#[test]
async fn filter_read_missing_returns_none() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    satellite.expect(Expect::get_not_found("/api/filters/21"));

    let state = resource.read(FilterId::new(21)).await?;
    assert!(state.is_none());
    Ok(())
}

#[test]
async fn filter_import_refuses_a_missing_id() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = FilterResource::new(&client);

    satellite.expect(Expect::get_not_found("/api/filters/21"));

    let err = resource
        .import(FilterId::new(21))
        .await
        .err()
        .expect("import must fail");
    assert_eq!(err.to_string(), "filter 21 not found");
    Ok(())
}

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn architecture_permissions() -> Value {
    json!({"results": [
        {"id": 10, "name": "view_architectures", "resource_type": "Architecture"},
        {"id": 11, "name": "edit_architectures", "resource_type": "Architecture"},
        {"id": 12, "name": "destroy_architectures", "resource_type": "Architecture"}
    ]})
}

// The filter most tests start from: one permission, location scoped, no
// search.
fn curator_filter_body() -> Value {
    json!({
        "id": 21,
        "search": null,
        "resource_type": "Architecture",
        "override?": false,
        "unlimited?": true,
        "role": {"id": 3, "name": "Crate Curators"},
        "permissions": [
            {"id": 10, "name": "view_architectures", "resource_type": "Architecture"}
        ],
        "locations": [{"id": 4, "name": "Berlin"}]
    })
}

fn curator_config() -> FilterConfig {
    let mut config = FilterConfig::new(RoleId::new(3), "Architecture");
    config.permission_names = names(&["view_architectures"]);
    config.location_ids = [LocationId::new(4)].iter().copied().collect();
    config
}

async fn read_curator_filter(
    satellite: &Satellite,
    resource: &FilterResource<Satellite>,
) -> Result<FilterState, Error> {
    satellite.expect(Expect::get("/api/filters/21", curator_filter_body()));
    let state = resource.read(FilterId::new(21)).await?;
    Ok(state.expect("the filter exists"))
}
