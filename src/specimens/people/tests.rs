use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{create_test_person, send_json};
use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("Paul", Some("A"), "Smith", Some("Jr."), "Paul A. Smith, Jr.", "P. Smith Jr.")]
#[case("Megan", Some("E"), "McCarty", None, "Megan E. McCarty", "M. McCarty")]
#[case("Thomas", None, "Williams", Some("III"), "Thomas Williams, III", "T. Williams III")]
#[case("Jane", None, "Doe", None, "Jane Doe", "J. Doe")]
#[tokio::test]
async fn test_person_names_are_derived(
    #[case] first: &str,
    #[case] middle: Option<&str>,
    #[case] last: &str,
    #[case] suffix: Option<&str>,
    #[case] full_name: &str,
    #[case] collector_name: &str,
) {
    let app = setup_test_app().await;
    let person_id = create_test_person(&app, first, middle, last, suffix).await;

    let (status, body) = send_json(&app, "GET", &format!("/api/people/{person_id}"), None).await;
    assert_eq!(status, StatusCode::OK, "Failed to get person: {body:?}");
    assert_eq!(body["full_name"], full_name);
    assert_eq!(body["collector_name"], collector_name);
}

#[tokio::test]
async fn test_people_listed_by_last_name() {
    let app = setup_test_app().await;
    create_test_person(&app, "Thomas", None, "Williams", Some("III")).await;
    create_test_person(&app, "Jane", None, "Doe", None).await;
    create_test_person(&app, "Megan", Some("E"), "McCarty", None).await;

    let (status, body) = send_json(&app, "GET", "/api/people", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|person| person["collector_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["J. Doe", "M. McCarty", "T. Williams III"]);
}

#[tokio::test]
async fn test_person_update_recomputes_names() {
    let app = setup_test_app().await;
    let person_id = create_test_person(&app, "Paul", Some("A"), "Smith", None).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/people/{person_id}"),
        Some(json!({ "suffix": "Jr." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to update person: {body:?}");
    assert_eq!(body["full_name"], "Paul A. Smith, Jr.");
    assert_eq!(body["collector_name"], "P. Smith Jr.");
}

#[tokio::test]
async fn test_person_rejects_long_middle_initial() {
    let app = setup_test_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/people",
        Some(json!({ "first_name": "Paul", "middle_initial": "Andrew", "last_name": "Smith" })),
    )
    .await;
    assert!(!status.is_success());

    let (_, body) = send_json(&app, "GET", "/api/people", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
