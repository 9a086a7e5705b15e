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

//! Integration tests of role management.

use rh_satellite::resource::RoleConfig;
use rh_satellite::resource::RoleResource;
use rh_satellite::resource::RoleState;
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

// Empty scoping sets are omitted from the creation; the server scopes
// the role to the defaults.
#[test]
async fn role_create_omits_empty_scoping_sets() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = RoleResource::new(&client);

    satellite.expect(Expect::create(
        "/api/roles",
        json!({"role": {
            "name": "Crate Curators",
            "description": "Manages crate architectures"
        }}),
        json!({"id": 7}),
    ));
    satellite.expect(Expect::get(
        "/api/roles/7",
        json!({
            "id": 7,
            "name": "Crate Curators",
            "description": "Manages crate architectures",
            "builtin": 0
        }),
    ));

    let mut config = RoleConfig::new("Crate Curators");
    config.description = Some("Manages crate architectures".to_string());
    let state = resource.create(&config).await?;
    assert_eq!(state.id, RoleId::new(7));
    assert!(state.location_ids.is_empty());
    assert!(state.organization_ids.is_empty());
    assert_eq!(state.builtin, Some(0));
    Ok(())
}

#[test]
async fn role_create_sends_the_configured_scoping() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = RoleResource::new(&client);

    satellite.expect(Expect::create(
        "/api/roles",
        json!({"role": {
            "name": "Crate Curators",
            "description": "Manages crate architectures",
            "location_ids": [4],
            "organization_ids": [1]
        }}),
        json!({"id": 7}),
    ));
    satellite.expect(Expect::get("/api/roles/7", curator_role_body()));

    let state = resource.create(&curator_role_config()).await?;
    // The id sets and the filter list come from the references of the
    // fresh read.
    assert_eq!(state.location_ids, [LocationId::new(4)].iter().copied().collect());
    assert_eq!(
        state.organization_ids,
        [OrganizationId::new(1)].iter().copied().collect()
    );
    assert_eq!(state.filters, vec![FilterId::new(21)]);
    Ok(())
}

#[test]
async fn role_create_requires_a_name() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = RoleResource::new(&client);

    let result = resource.create(&RoleConfig::new("")).await;
    assert!(matches!(result, Err(Error::EmptyField("name"))));
    Ok(())
}

// Scoping sets that changed to empty are sent as empty lists, clearing
// them.
#[test]
async fn role_update_clears_dropped_scoping() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = RoleResource::new(&client);
    let prior = read_curator_role(&satellite, &resource).await?;

    satellite.expect(Expect::update(
        "/api/roles/7",
        json!({"role": {"location_ids": [], "organization_ids": []}}),
        json!({"id": 7}),
    ));
    satellite.expect(Expect::get(
        "/api/roles/7",
        json!({
            "id": 7,
            "name": "Crate Curators",
            "description": "Manages crate architectures",
            "builtin": 0,
            "filters": [{"id": 21}]
        }),
    ));

    let mut config = curator_role_config();
    config.location_ids = BTreeSet::new();
    config.organization_ids = BTreeSet::new();
    let state = resource.update(RoleId::new(7), &prior, &config).await?;
    assert!(state.location_ids.is_empty());
    assert!(state.organization_ids.is_empty());
    Ok(())
}

#[test]
async fn role_update_skips_the_call_when_nothing_changed() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = RoleResource::new(&client);
    let prior = read_curator_role(&satellite, &resource).await?;

    satellite.expect(Expect::get("/api/roles/7", curator_role_body()));

    let state = resource
        .update(RoleId::new(7), &prior, &curator_role_config())
        .await?;
    assert_eq!(state, prior);
    Ok(())
}

#[test]
async fn role_read_missing_returns_none() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = RoleResource::new(&client);

    satellite.expect(Expect::get_not_found("/api/roles/7"));

    let state = resource.read(RoleId::new(7)).await?;
    assert!(state.is_none());
    Ok(())
}

fn curator_role_body() -> Value {
    json!({
        "id": 7,
        "name": "Crate Curators",
        "description": "Manages crate architectures",
        "builtin": 0,
        "filters": [{"id": 21}],
        "locations": [{"id": 4, "name": "Berlin"}],
        "organizations": [{"id": 1, "name": "ACME"}]
    })
}

fn curator_role_config() -> RoleConfig {
    let mut config = RoleConfig::new("Crate Curators");
    config.description = Some("Manages crate architectures".to_string());
    config.location_ids = [LocationId::new(4)].iter().copied().collect();
    config.organization_ids = [OrganizationId::new(1)].iter().copied().collect();
    config
}

async fn read_curator_role(
    satellite: &Satellite,
    resource: &RoleResource<Satellite>,
) -> Result<RoleState, Error> {
    satellite.expect(Expect::get("/api/roles/7", curator_role_body()));
    let state = resource.read(RoleId::new(7)).await?;
    Ok(state.expect("the role exists"))
}
