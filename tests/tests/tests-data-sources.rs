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

//! Integration tests of the lookup calls. A lookup filters a listing
//! down and demands exactly one match, except for products, which
//! return every match.

use rh_satellite::content_view::ContentViewFilter;
use rh_satellite::lifecycle_environment::LifecycleEnvironmentFilter;
use rh_satellite::product::ProductFilter;
use rh_satellite::AuthSourceId;
use rh_satellite::ContentViewId;
use rh_satellite::LifecycleEnvironmentId;
use rh_satellite::OrganizationId;
use rh_satellite::ProductId;
use rh_satellite::SatelliteClient;
use rh_satellite_tests::Error;
use rh_satellite_tests::Expect;
use rh_satellite_tests::Satellite;
use rh_satellite_tests::TestError;
use serde_json::json;
use std::sync::Arc;
use tokio::test;

#[test]
async fn organization_find_returns_the_single_match() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/organizations",
        "search=name+%3D+%22ACME%22",
        json!({"results": [{"id": 3, "name": "ACME"}]}),
    ));

    let found = client.organizations().find("name = \"ACME\"").await?;
    assert_eq!(found.id, OrganizationId::new(3));
    assert_eq!(found.name.as_deref(), Some("ACME"));
    Ok(())
}

#[test]
async fn organization_find_rejects_an_empty_search() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    let result = client.organizations().find("").await;
    assert!(matches!(result, Err(Error::EmptyField("search"))));
    Ok(())
}

#[test]
async fn organization_find_reports_zero_matches() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/organizations",
        "search=name+%3D+%22ACME%22",
        json!({"results": []}),
    ));

    let err = client
        .organizations()
        .find("name = \"ACME\"")
        .await
        .err()
        .expect("the lookup must fail");
    assert_eq!(
        err.to_string(),
        "no organizations found for search string name = \"ACME\""
    );
    Ok(())
}

#[test]
async fn organization_find_reports_ambiguous_matches() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/organizations",
        "search=name+%3D+%22ACME%22",
        json!({"results": [
            {"id": 3, "name": "ACME"},
            {"id": 4, "name": "ACME Subsidiary"}
        ]}),
    ));

    let err = client
        .organizations()
        .find("name = \"ACME\"")
        .await
        .err()
        .expect("the lookup must fail");
    assert_eq!(
        err.to_string(),
        "2 organizations found for search string name = \"ACME\""
    );
    Ok(())
}

#[test]
async fn organization_find_propagates_a_failed_search() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search_failure(
        "/katello/api/organizations",
        "search=name+%3D+%22ACME%22",
        TestError::default(),
    ));

    let err = client
        .organizations()
        .find("name = \"ACME\"")
        .await
        .err()
        .expect("the lookup must fail");
    assert!(matches!(&err, Error::Api(_)));
    assert_eq!(
        err.to_string(),
        "API request failed: response: injected transport failure"
    );
    Ok(())
}

#[test]
async fn content_view_find_filters_the_listing() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/content_views",
        "organization_id=1&name=cv-prod",
        json!({"results": [{"id": 4, "name": "cv-prod"}]}),
    ));

    let filter = ContentViewFilter {
        organization_id: Some(OrganizationId::new(1)),
        name: Some("cv-prod".to_string()),
        ..ContentViewFilter::default()
    };
    let found = client.content_views().find(&filter).await?;
    assert_eq!(found.id, ContentViewId::new(4));
    Ok(())
}

// Excluded names render as a repeated bracket parameter.
#[test]
async fn content_view_find_excludes_the_without_names() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/content_views",
        "organization_id=1&without%5B%5D=cv-one&without%5B%5D=cv-two",
        json!({"results": []}),
    ));

    let filter = ContentViewFilter {
        organization_id: Some(OrganizationId::new(1)),
        without: vec!["cv-one".to_string(), "cv-two".to_string()],
        ..ContentViewFilter::default()
    };
    let err = client
        .content_views()
        .find(&filter)
        .await
        .err()
        .expect("the lookup must fail");
    assert_eq!(err.to_string(), "no content views found");
    Ok(())
}

#[test]
async fn content_view_find_reports_ambiguity_without_a_search_string() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/content_views",
        "nondefault=true",
        json!({"results": [
            {"id": 4, "name": "cv-prod"},
            {"id": 6, "name": "cv-dev"}
        ]}),
    ));

    let filter = ContentViewFilter {
        nondefault: Some(true),
        ..ContentViewFilter::default()
    };
    let err = client
        .content_views()
        .find(&filter)
        .await
        .err()
        .expect("the lookup must fail");
    assert_eq!(
        err.to_string(),
        "2 content views found, adjust arguments so only 1 is returned"
    );
    Ok(())
}

#[test]
async fn lifecycle_environment_find_scopes_by_organization() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/environments",
        "name=Production&organization_id=1",
        json!({"results": [{"id": 2, "name": "Production"}]}),
    ));

    let filter = LifecycleEnvironmentFilter {
        name: Some("Production".to_string()),
        organization_id: Some(OrganizationId::new(1)),
        ..LifecycleEnvironmentFilter::default()
    };
    let found = client.lifecycle_environments().find(&filter).await?;
    assert_eq!(found.id, LifecycleEnvironmentId::new(2));
    Ok(())
}

// Products are the one lookup that tolerates several matches.
#[test]
async fn product_find_returns_every_match() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/katello/api/products",
        "organization_id=1&red_hat_only=true",
        json!({"results": [
            {"id": 12, "name": "Red Hat Enterprise Linux"},
            {"id": 13, "name": "Red Hat Satellite"}
        ]}),
    ));

    let filter = ProductFilter {
        organization_id: Some(OrganizationId::new(1)),
        red_hat_only: Some(true),
        ..ProductFilter::default()
    };
    let products = client.products().find(&filter).await?;
    let ids: Vec<_> = products.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![ProductId::new(12), ProductId::new(13)]);
    Ok(())
}

#[test]
async fn auth_source_ldap_find_returns_the_single_match() -> Result<(), Error> {
    let satellite = Arc::new(Satellite::default());
    let client: SatelliteClient<Satellite> = SatelliteClient::new(satellite.clone());

    satellite.expect(Expect::search(
        "/api/auth_source_ldaps",
        "search=name+%3D+corp-ldap",
        json!({"results": [{"id": 2, "name": "corp-ldap", "host": "ldap.example.com"}]}),
    ));

    let found = client.auth_source_ldaps().find("name = corp-ldap").await?;
    assert_eq!(found.id, AuthSourceId::new(2));
    assert_eq!(found.host.as_deref(), Some("ldap.example.com"));
    Ok(())
}
