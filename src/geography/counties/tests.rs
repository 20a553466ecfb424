use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{
    create_test_country, create_test_county, create_test_state, send_json,
};
use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("Indiana", "IN", "Switzerland", "Co.", "", "Switzerland Co.", "Switzerland Co., IN")]
#[case("Louisiana", "LA", "Rapides", "Par.", "", "Rapides Par.", "Rapides Par., LA")]
#[case("Alaska", "AK", "Fairbanks N. Star", "Boro.", "", "Fairbanks N. Star Boro.", "Fairbanks N. Star Boro., AK")]
#[case("Alaska", "AK", "Yukon-Koyukuk Census Area", "", "", "Yukon-Koyukuk Census Area", "Yukon-Koyukuk Census Area, AK")]
#[case("Colorado", "CO", "Clear Creek/Summit", "Co.", "line", "Clear Creek/Summit Co. line", "Clear Creek/Summit Co. line, CO")]
#[tokio::test]
async fn test_county_labels_are_derived(
    #[case] state_name: &str,
    #[case] state_abbr: &str,
    #[case] county_name: &str,
    #[case] abbr: &str,
    #[case] county_line: &str,
    #[case] full_name: &str,
    #[case] display_name: &str,
) {
    let app = setup_test_app().await;
    let country_id = create_test_country(&app, "United States of America", "USA").await;
    let state_id = create_test_state(&app, &country_id, state_name, state_abbr).await;
    let county_id = create_test_county(&app, &state_id, county_name).await;

    let (status, body) = send_json(&app, "GET", &format!("/api/counties/{county_id}"), None).await;
    assert_eq!(status, StatusCode::OK, "Failed to get county: {body:?}");
    assert_eq!(body["name"], county_name);
    assert_eq!(body["abbr"], abbr);
    assert_eq!(body["county_line"], county_line);
    assert_eq!(body["full_name"], full_name);
    assert_eq!(body["display_name"], display_name);
    assert_eq!(body["state"]["name"], state_name);
    assert_eq!(body["state"]["abbr"], state_abbr);
    assert_eq!(body["country"]["abbr"], "USA");
}

#[tokio::test]
async fn test_county_create_response_carries_labels() {
    let app = setup_test_app().await;
    let country_id = create_test_country(&app, "United States of America", "USA").await;
    let state_id = create_test_state(&app, &country_id, "Louisiana", "LA").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/counties",
        Some(json!({ "state_id": state_id, "name": "Rapides" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create county: {body:?}");
    assert_eq!(body["full_name"], "Rapides Par.");
}

#[tokio::test]
async fn test_county_labels_follow_state_changes() {
    let app = setup_test_app().await;
    let country_id = create_test_country(&app, "United States of America", "USA").await;
    let indiana_id = create_test_state(&app, &country_id, "Indiana", "IN").await;
    let alaska_id = create_test_state(&app, &country_id, "Alaska", "AK").await;
    let county_id = create_test_county(&app, &indiana_id, "Denali").await;

    let (_, body) = send_json(&app, "GET", &format!("/api/counties/{county_id}"), None).await;
    assert_eq!(body["full_name"], "Denali Co.");

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/counties/{county_id}"),
        Some(json!({ "state_id": alaska_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to move county: {body:?}");
    assert_eq!(body["abbr"], "Boro.");
    assert_eq!(body["full_name"], "Denali Boro.");
    assert_eq!(body["display_name"], "Denali Boro., AK");
}

#[tokio::test]
async fn test_county_list_is_labelled() {
    let app = setup_test_app().await;
    let country_id = create_test_country(&app, "United States of America", "USA").await;
    let state_id = create_test_state(&app, &country_id, "Louisiana", "LA").await;
    create_test_county(&app, &state_id, "Rapides").await;
    create_test_county(&app, &state_id, "Orleans").await;

    let (status, body) = send_json(&app, "GET", "/api/counties", None).await;
    assert_eq!(status, StatusCode::OK);
    let counties = body.as_array().expect("Counties list should be an array");
    assert_eq!(counties.len(), 2);
    for county in counties {
        assert_eq!(county["abbr"], "Par.");
        assert_eq!(county["state"]["abbr"], "LA");
    }
}
