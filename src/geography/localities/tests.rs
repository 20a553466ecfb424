use crate::config::test_helpers::setup_test_app;
use crate::geography::validation::{
    COUNTY_AND_COUNTRY, COUNTY_AND_STATE, COUNTY_STATE_AND_COUNTRY, STATE_AND_COUNTRY,
};
use crate::test_helpers::{
    create_test_country, create_test_county, create_test_geography, create_test_record,
    create_test_state, send_json,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

fn locality_names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("Expected a list of localities")
        .iter()
        .map(|locality| locality["name"].as_str().unwrap())
        .collect()
}

fn error_fields(body: &Value) -> Vec<String> {
    let mut fields: Vec<String> = body["error"]["fields"]
        .as_object()
        .expect("Validation error should list fields")
        .keys()
        .cloned()
        .collect();
    fields.sort();
    fields
}

#[tokio::test]
async fn test_locality_display_names() {
    let app = setup_test_app().await;

    let usa_id = create_test_country(&app, "United States of America", "USA").await;
    let mexico_id = create_test_country(&app, "Mexico", "MEX").await;
    let canada_id = create_test_country(&app, "Canada", "CAN").await;
    let alaska_id = create_test_state(&app, &usa_id, "Alaska", "AK").await;
    let indiana_id = create_test_state(&app, &usa_id, "Indiana", "IN").await;
    let pei_id = create_test_state(&app, &canada_id, "Prince Edward Island", "PEI").await;
    let fairbanks_id = create_test_county(&app, &alaska_id, "Fairbanks N. Star").await;
    let switzerland_id = create_test_county(&app, &indiana_id, "Switzerland").await;
    let jefferson_id = create_test_county(&app, &indiana_id, "Jefferson").await;

    let cases = [
        (
            json!({ "name": "Bonanza Creek Experimental Forest", "range": "23 km SW", "town": "Ester", "county_id": fairbanks_id }),
            "Bonanza Creek Experimental Forest, 23 km SW Ester, Fairbanks N. Star Boro.",
        ),
        (
            json!({ "range": "4 km NW", "town": "Patriot", "county_id": switzerland_id }),
            "4 km NW Patriot, Switzerland Co.",
        ),
        (
            json!({ "name": "Big Oaks NWR", "town": "Madison", "county_id": jefferson_id }),
            "Big Oaks NWR, Madison, Jefferson Co.",
        ),
        (
            json!({ "town": "Montague", "state_id": pei_id }),
            "Montague, PEI",
        ),
        (
            json!({ "name": "Carolina Biological Supply Company", "country_id": usa_id }),
            "Carolina Biological Supply Company, USA",
        ),
        (
            json!({ "town": "Mexico City", "country_id": mexico_id }),
            "Mexico City, MEX",
        ),
    ];

    for (payload, expected) in cases {
        let (status, body) = send_json(&app, "POST", "/api/localities", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED, "Failed to create locality: {body:?}");
        assert_eq!(body["display_name"], expected);
    }
}

#[tokio::test]
async fn test_locality_nests_only_its_region() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;

    let locality_id = create_test_record(
        &app,
        "/api/localities",
        json!({ "name": "Boone Robinson Rd", "range": "4 km NW", "town": "Patriot", "county_id": geography.county_id }),
    )
    .await;

    let (status, body) =
        send_json(&app, "GET", &format!("/api/localities/{locality_id}"), None).await;
    assert_eq!(status, StatusCode::OK, "Failed to get locality: {body:?}");
    assert_eq!(body["county"]["name"], "Switzerland");
    assert_eq!(body["county"]["abbr"], "Co.");
    assert_eq!(body["county"]["full_name"], "Switzerland Co.");
    assert!(body["state"].is_null());
    assert!(body["country"].is_null());
}

#[tokio::test]
async fn test_locality_rejects_multiple_regions() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;

    let cases = [
        (
            json!({ "name": "Test National Forest", "county_id": geography.county_id, "state_id": geography.state_id }),
            vec!["county", "state"],
            COUNTY_AND_STATE,
        ),
        (
            json!({ "name": "Test National Forest", "county_id": geography.county_id, "country_id": geography.country_id }),
            vec!["country", "county"],
            COUNTY_AND_COUNTRY,
        ),
        (
            json!({ "name": "Test National Forest", "state_id": geography.state_id, "country_id": geography.country_id }),
            vec!["country", "state"],
            STATE_AND_COUNTRY,
        ),
        (
            json!({
                "name": "Test National Forest",
                "county_id": geography.county_id,
                "state_id": geography.state_id,
                "country_id": geography.country_id,
            }),
            vec!["country", "county", "state"],
            COUNTY_STATE_AND_COUNTRY,
        ),
    ];

    for (payload, expected_fields, expected_message) in cases {
        let (status, body) = send_json(&app, "POST", "/api/localities", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "Expected rejection: {body:?}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(error_fields(&body), expected_fields);
        for field in &expected_fields {
            assert_eq!(body["error"]["fields"][field], expected_message);
        }
    }

    // Nothing was persisted
    let (status, body) = send_json(&app, "GET", "/api/localities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_locality_update_validates_merged_record() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;

    let locality_id = create_test_record(
        &app,
        "/api/localities",
        json!({ "town": "Patriot", "county_id": geography.county_id }),
    )
    .await;

    // Adding a state to a county locality conflicts with the stored county
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/localities/{locality_id}"),
        Some(json!({ "state_id": geography.state_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "Expected rejection: {body:?}");
    assert_eq!(error_fields(&body), vec!["county", "state"]);

    let (_, body) =
        send_json(&app, "GET", &format!("/api/localities/{locality_id}"), None).await;
    assert_eq!(body["county_id"], geography.county_id.as_str());
    assert!(body["state_id"].is_null());

    // Swapping the county for a state in one request leaves a single region
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/localities/{locality_id}"),
        Some(json!({ "county_id": null, "state_id": geography.state_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to move locality: {body:?}");
    assert_eq!(body["display_name"], "Patriot, IN");

    // And a country added on top of the stored state is caught
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/localities/{locality_id}"),
        Some(json!({ "country_id": geography.country_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "Expected rejection: {body:?}");
    assert_eq!(error_fields(&body), vec!["country", "state"]);

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/localities/{locality_id}"),
        Some(json!({ "state_id": null, "county_id": geography.county_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Fields that leave the region alone still pass
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/localities/{locality_id}"),
        Some(json!({ "town": "Vevay" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to update locality: {body:?}");
    assert_eq!(body["display_name"], "Vevay, Switzerland Co.");
    assert!(body["state_id"].is_null());
}

#[tokio::test]
async fn test_locality_list_order_and_filter() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;
    let other_county = create_test_county(&app, &geography.state_id, "Jefferson").await;

    for (name, county_id) in [
        ("Markland Dam", &geography.county_id),
        ("Big Oaks NWR", &other_county),
        ("Boone Robinson Rd", &geography.county_id),
    ] {
        create_test_record(
            &app,
            "/api/localities",
            json!({ "name": name, "county_id": county_id }),
        )
        .await;
    }

    let (status, body) = send_json(&app, "GET", "/api/localities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        locality_names(&body),
        vec!["Big Oaks NWR", "Boone Robinson Rd", "Markland Dam"]
    );

    // crudcrate's sort overrides the default order
    let (status, body) = send_json(
        &app,
        "GET",
        "/api/localities?sort=%5B%22name%22%2C%22DESC%22%5D",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        locality_names(&body),
        vec!["Markland Dam", "Boone Robinson Rd", "Big Oaks NWR"]
    );

    // filter={"county_id":["<id>"]}
    let (status, body) = send_json(
        &app,
        "GET",
        &format!(
            "/api/localities?filter=%7B%22county_id%22%3A%5B%22{}%22%5D%7D",
            geography.county_id
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(locality_names(&body), vec!["Boone Robinson Rd", "Markland Dam"]);
    assert_eq!(body[0]["display_name"], "Boone Robinson Rd, Switzerland Co.");

    let request = Request::builder()
        .method("GET")
        .uri("/api/localities?range=%5B0%2C1%5D")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_range = response
        .headers()
        .get("content-range")
        .expect("Listing should report its range")
        .to_str()
        .unwrap();
    assert_eq!(content_range, "localities 0-1/3");
}

#[tokio::test]
async fn test_locality_delete_and_not_found() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;
    let locality_id = create_test_record(
        &app,
        "/api/localities",
        json!({ "town": "Patriot", "county_id": geography.county_id }),
    )
    .await;

    let (status, _) =
        send_json(&app, "DELETE", &format!("/api/localities/{locality_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) =
        send_json(&app, "GET", &format!("/api/localities/{locality_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "Deleted locality still readable: {body:?}");

    let (status, _) =
        send_json(&app, "DELETE", &format!("/api/localities/{locality_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_county_cascades_to_localities_and_gps() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;
    let locality_id = create_test_record(
        &app,
        "/api/localities",
        json!({ "name": "Boone Robinson Rd", "range": "4 km NW", "town": "Patriot", "county_id": geography.county_id }),
    )
    .await;

    let (status, gps) = send_json(
        &app,
        "POST",
        "/api/gps_coordinates",
        Some(json!({
            "locality_id": locality_id,
            "latitude": "38.849500",
            "longitude": "-84.866328",
            "elevation": "252",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create GPS: {gps:?}");
    assert_eq!(gps["elevation_meters"], "252m");
    assert_eq!(
        gps["display_name"],
        "38.849500 -84.866328 252m, Boone Robinson Rd, 4 km NW Patriot, Switzerland Co."
    );
    assert_eq!(gps["locality"]["range"], "4 km NW");
    let gps_id = gps["id"].as_str().unwrap().to_string();

    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/counties/{}", geography.county_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        send_json(&app, "GET", &format!("/api/localities/{locality_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) =
        send_json(&app, "GET", &format!("/api/gps_coordinates/{gps_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gps_elevation_range() {
    let app = setup_test_app().await;
    let geography = create_test_geography(&app).await;
    let locality_id = create_test_record(
        &app,
        "/api/localities",
        json!({ "name": "William's Lake Trail", "county_id": geography.county_id }),
    )
    .await;

    let (status, gps) = send_json(
        &app,
        "POST",
        "/api/gps_coordinates",
        Some(json!({ "locality_id": locality_id, "elevation": "3157-3402" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create GPS: {gps:?}");
    assert!(gps["latitude"].is_null());
    assert_eq!(gps["elevation_meters"], "3157-3402m");
    assert_eq!(
        gps["display_name"],
        "3157-3402m, William's Lake Trail, Switzerland Co."
    );
}
