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

//! Integration tests of host collection management. Collections are
//! created under their organization but addressed directly afterwards.

use rh_satellite::resource::HostCollectionConfig;
use rh_satellite::resource::HostCollectionResource;
use rh_satellite::resource::HostCollectionState;
use rh_satellite::HostCollectionId;
use rh_satellite::OrganizationId;
use rh_satellite::SatelliteClient;
use rh_satellite_tests::Error;
use rh_satellite_tests::Expect;
use rh_satellite_tests::Satellite;
use serde_json::json;
use serde_json::Value;
use std::sync::Arc;
use tokio::test;

#[test]
async fn host_collection_create_posts_into_its_organization() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = HostCollectionResource::new(&client);

    satellite.expect(Expect::create(
        "/katello/api/organizations/1/host_collections",
        json!({"name": "web", "unlimited_hosts": true}),
        json!({"id": 3}),
    ));
    satellite.expect(Expect::get("/katello/api/host_collections/3", web_body()));

    let state = resource.create(&web_config()).await?;
    assert_eq!(state.id, HostCollectionId::new(3));
    assert_eq!(state.organization_id, Some(OrganizationId::new(1)));
    assert_eq!(state.name.as_deref(), Some("web"));
    assert_eq!(state.unlimited_hosts, Some(true));
    assert_eq!(state.max_hosts, None);
    Ok(())
}

#[test]
async fn host_collection_create_requires_a_name() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = HostCollectionResource::new(&client);

    let config = HostCollectionConfig::new(OrganizationId::new(1), "");
    let result = resource.create(&config).await;
    assert!(matches!(result, Err(Error::EmptyField("name"))));
    Ok(())
}

#[test]
async fn host_collection_update_caps_the_host_count() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = HostCollectionResource::new(&client);
    let prior = read_web_collection(&satellite, &resource).await?;

    satellite.expect(Expect::update(
        "/katello/api/host_collections/3",
        json!({"max_hosts": 20, "unlimited_hosts": false}),
        json!({"id": 3}),
    ));
    satellite.expect(Expect::get(
        "/katello/api/host_collections/3",
        json!({
            "id": 3,
            "organization_id": 1,
            "name": "web",
            "max_hosts": 20,
            "unlimited_hosts": false
        }),
    ));

    let mut config = web_config();
    config.max_hosts = Some(20);
    config.unlimited_hosts = false;
    let state = resource
        .update(HostCollectionId::new(3), &prior, &config)
        .await?;
    assert_eq!(state.max_hosts, Some(20));
    assert_eq!(state.unlimited_hosts, Some(false));
    Ok(())
}

#[test]
async fn host_collection_update_skips_the_call_when_nothing_changed() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = HostCollectionResource::new(&client);
    let prior = read_web_collection(&satellite, &resource).await?;

    satellite.expect(Expect::get("/katello/api/host_collections/3", web_body()));

    let state = resource
        .update(HostCollectionId::new(3), &prior, &web_config())
        .await?;
    assert_eq!(state, prior);
    Ok(())
}

#[test]
async fn host_collection_read_missing_returns_none() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = HostCollectionResource::new(&client);

    satellite.expect(Expect::get_not_found("/katello/api/host_collections/3"));

    assert_eq!(resource.read(HostCollectionId::new(3)).await?, None);
    Ok(())
}

fn web_body() -> Value {
    json!({
        "id": 3,
        "organization_id": 1,
        "name": "web",
        "max_hosts": null,
        "unlimited_hosts": true
    })
}

fn web_config() -> HostCollectionConfig {
    HostCollectionConfig::new(OrganizationId::new(1), "web")
}

async fn read_web_collection(
    satellite: &Satellite,
    resource: &HostCollectionResource<Satellite>,
) -> Result<HostCollectionState, Error> {
    satellite.expect(Expect::get("/katello/api/host_collections/3", web_body()));
    let state = resource.read(HostCollectionId::new(3)).await?;
    Ok(state.expect("the host collection exists"))
}
