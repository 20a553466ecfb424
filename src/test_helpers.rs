/// Shared test helpers for building records through the HTTP API.
///
/// Builders follow the two hierarchies: Country → State → County → Locality → GPS
/// and Order → Family → Subfamily → Tribe → Genus → Species → Subspecies.
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Extract response body as JSON for testing
pub async fn extract_response_body(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Send a request with an optional JSON body and decode the response
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    extract_response_body(response).await
}

/// POST a payload and return the id of the created record
pub async fn create_test_record(app: &axum::Router, uri: &str, payload: Value) -> String {
    let (status, body) = send_json(app, "POST", uri, Some(payload)).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create record at {uri}: {body:?}"
    );
    body["id"].as_str().unwrap().to_string()
}

pub async fn create_test_country(app: &axum::Router, name: &str, abbr: &str) -> String {
    create_test_record(app, "/api/countries", json!({ "name": name, "abbr": abbr })).await
}

pub async fn create_test_state(
    app: &axum::Router,
    country_id: &str,
    name: &str,
    abbr: &str,
) -> String {
    create_test_record(
        app,
        "/api/states",
        json!({ "country_id": country_id, "name": name, "abbr": abbr }),
    )
    .await
}

pub async fn create_test_county(app: &axum::Router, state_id: &str, name: &str) -> String {
    create_test_record(
        app,
        "/api/counties",
        json!({ "state_id": state_id, "name": name }),
    )
    .await
}

/// USA with Indiana and its Switzerland County
pub struct TestGeography {
    pub country_id: String,
    pub state_id: String,
    pub county_id: String,
}

pub async fn create_test_geography(app: &axum::Router) -> TestGeography {
    let country_id = create_test_country(app, "United States of America", "USA").await;
    let state_id = create_test_state(app, &country_id, "Indiana", "IN").await;
    let county_id = create_test_county(app, &state_id, "Switzerland").await;

    TestGeography {
        country_id,
        state_id,
        county_id,
    }
}

pub async fn create_test_person(
    app: &axum::Router,
    first_name: &str,
    middle_initial: Option<&str>,
    last_name: &str,
    suffix: Option<&str>,
) -> String {
    create_test_record(
        app,
        "/api/people",
        json!({
            "first_name": first_name,
            "middle_initial": middle_initial,
            "last_name": last_name,
            "suffix": suffix,
        }),
    )
    .await
}

/// Papilio polyxenes and its parents
pub struct TestLineage {
    pub order_id: String,
    pub family_id: String,
    pub subfamily_id: String,
    pub tribe_id: String,
    pub genus_id: String,
    pub species_id: String,
}

pub async fn create_test_lineage(app: &axum::Router) -> TestLineage {
    let order_id = create_test_record(
        app,
        "/api/orders",
        json!({ "name": "Lepidoptera", "common_name": "Butterflies and moths", "authority": "Linnaeus, 1758" }),
    )
    .await;
    let family_id = create_test_record(
        app,
        "/api/families",
        json!({ "order_id": order_id, "name": "Papilionidae", "common_name": "Swallowtails", "authority": "Latreille, [1802]" }),
    )
    .await;
    let subfamily_id = create_test_record(
        app,
        "/api/subfamilies",
        json!({ "family_id": family_id, "name": "Papilioninae", "authority": "Latreille, [1802]" }),
    )
    .await;
    let tribe_id = create_test_record(
        app,
        "/api/tribes",
        json!({ "subfamily_id": subfamily_id, "name": "Papilionini", "authority": "Latreille, [1802]" }),
    )
    .await;
    let genus_id = create_test_record(
        app,
        "/api/genera",
        json!({ "tribe_id": tribe_id, "name": "Papilio", "authority": "Linnaeus, 1758" }),
    )
    .await;
    let species_id = create_test_record(
        app,
        "/api/species",
        json!({
            "genus_id": genus_id,
            "name": "polyxenes",
            "common_name": "Black Swallowtail",
            "authority": "Fabricius, 1775",
            "mona": "4159",
            "p3": "770203",
            "ps": "9",
        }),
    )
    .await;

    TestLineage {
        order_id,
        family_id,
        subfamily_id,
        tribe_id,
        genus_id,
        species_id,
    }
}
