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

//! Integration tests of organization management.

use rh_satellite::resource::OrganizationConfig;
use rh_satellite::resource::OrganizationResource;
use rh_satellite::resource::OrganizationState;
use rh_satellite::OrganizationId;
use rh_satellite::SatelliteClient;
use rh_satellite_api_mock::ExpectedRequest;
use rh_satellite_api_mock::Response;
use rh_satellite_tests::Error;
use rh_satellite_tests::Expect;
use rh_satellite_tests::Satellite;
use rh_satellite_tests::TestError;
use serde_json::json;
use std::sync::Arc;
use tokio::test;

// Creation posts the wrapped payload and builds the state from a fresh
// read, not from the creation response.
#[test]
async fn organization_create_reads_back_the_created_state() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::create(
        "/katello/api/organizations",
        json!({"organization": {
            "name": "ACME",
            "description": "Packing crates",
            "label": "acme"
        }}),
        json!({"id": 3, "name": "ACME"}),
    ));
    satellite.expect(Expect::get(
        "/katello/api/organizations/3",
        json!({
            "id": 3,
            "name": "ACME",
            "title": "ACME",
            "label": "acme",
            "description": "Packing crates",
            "hosts_count": 0
        }),
    ));

    let mut config = OrganizationConfig::new("ACME");
    config.description = Some("Packing crates".to_string());
    config.label = Some("acme".to_string());
    let state = resource.create(&config).await?;

    assert_eq!(state.id, OrganizationId::new(3));
    assert_eq!(state.name.as_deref(), Some("ACME"));
    assert_eq!(state.description.as_deref(), Some("Packing crates"));
    assert_eq!(state.label.as_deref(), Some("acme"));
    assert_eq!(state.hosts_count, Some(0));
    Ok(())
}

// A server failure on create surfaces unchanged, with no retry.
#[test]
async fn organization_create_failure_propagates_verbatim() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::create_failure(
        "/katello/api/organizations",
        json!({"organization": {"name": "ACME"}}),
        TestError,
    ));

    let result = resource.create(&OrganizationConfig::new("ACME")).await;
    let err = result.err().expect("create must fail");
    assert!(matches!(&err, Error::Api(_)));
    assert_eq!(
        err.to_string(),
        "API request failed: response: injected transport failure"
    );
    Ok(())
}

// A missing organization reads back as None instead of an error.
#[test]
async fn organization_read_missing_returns_none() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::get_not_found("/katello/api/organizations/3"));

    let state = resource.read(OrganizationId::new(3)).await?;
    assert!(state.is_none());
    Ok(())
}

// When the desired values already match, no update goes out; the label
// is fixed at creation and never part of an update either.
#[test]
async fn organization_update_skips_the_call_when_nothing_changed() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::get(
        "/katello/api/organizations/3",
        json!({"id": 3, "name": "ACME", "description": "Packing crates"}),
    ));

    let mut config = OrganizationConfig::new("ACME");
    config.description = Some("Packing crates".to_string());
    config.label = Some("another-label".to_string());
    let state = resource
        .update(OrganizationId::new(3), &acme_state(), &config)
        .await?;
    assert_eq!(state.name.as_deref(), Some("ACME"));
    Ok(())
}

// Only the fields that differ from the prior state are sent, and the
// returned state reflects the fresh read.
#[test]
async fn organization_update_sends_only_the_changed_fields() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::update(
        "/katello/api/organizations/3",
        json!({"organization": {
            "name": "ACME Corp",
            "description": "Packing better crates"
        }}),
        json!({"id": 3, "name": "ACME Corp"}),
    ));
    satellite.expect(Expect::get(
        "/katello/api/organizations/3",
        json!({
            "id": 3,
            "name": "ACME Corp",
            "description": "Packing better crates",
            "hosts_count": 13
        }),
    ));

    let mut config = OrganizationConfig::new("ACME Corp");
    config.description = Some("Packing better crates".to_string());
    let state = resource
        .update(OrganizationId::new(3), &acme_state(), &config)
        .await?;

    assert_eq!(state.name.as_deref(), Some("ACME Corp"));
    assert_eq!(state.description.as_deref(), Some("Packing better crates"));
    assert_eq!(state.hosts_count, Some(13));
    Ok(())
}

// Dropping the description from the configuration clears it on the
// server with an explicit empty string.
#[test]
async fn organization_update_clears_a_dropped_description() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::update(
        "/katello/api/organizations/3",
        json!({"organization": {"description": ""}}),
        json!({"id": 3, "name": "ACME"}),
    ));
    satellite.expect(Expect::get(
        "/katello/api/organizations/3",
        json!({"id": 3, "name": "ACME", "description": ""}),
    ));

    let config = OrganizationConfig::new("ACME");
    let state = resource
        .update(OrganizationId::new(3), &acme_state(), &config)
        .await?;
    assert_eq!(state.description.as_deref(), Some(""));
    Ok(())
}

#[test]
async fn organization_delete_issues_one_call() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::delete("/katello/api/organizations/3"));

    resource.delete(OrganizationId::new(3)).await?;
    Ok(())
}

// The missing-resource answer is only forgiven on read. A deletion that
// races an outside removal surfaces the 404 as an API error.
#[test]
async fn organization_delete_does_not_forgive_a_missing_id() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect {
        request: ExpectedRequest::Delete {
            path: "/katello/api/organizations/3".to_string().into(),
        },
        response: Response::NotFound,
    });

    let result = resource.delete(OrganizationId::new(3)).await;
    let err = result.err().expect("delete must fail");
    assert!(matches!(&err, Error::Api(_)));
    assert!(err.is_not_found());
    Ok(())
}

// Importing adopts an existing organization and refuses a missing one.
#[test]
async fn organization_import_requires_the_id_to_exist() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());
    let resource = OrganizationResource::new(&client);

    satellite.expect(Expect::get(
        "/katello/api/organizations/3",
        json!({"id": 3, "name": "ACME"}),
    ));
    let state = resource.import(OrganizationId::new(3)).await?;
    assert_eq!(state.name.as_deref(), Some("ACME"));

    satellite.expect(Expect::get_not_found("/katello/api/organizations/3"));
    let err = resource
        .import(OrganizationId::new(3))
        .await
        .err()
        .expect("import must fail");
    assert!(matches!(&err, Error::Gone { .. }));
    assert_eq!(err.to_string(), "organization 3 not found");
    Ok(())
}

fn acme_state() -> OrganizationState {
    OrganizationState {
        id: OrganizationId::new(3),
        name: Some("ACME".to_string()),
        description: Some("Packing crates".to_string()),
        label: Some("acme".to_string()),
        title: Some("ACME".to_string()),
        hosts_count: Some(12),
    }
}
