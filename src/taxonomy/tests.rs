use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{create_test_lineage, create_test_record, send_json};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_species_binomial_and_parent() {
    let app = setup_test_app().await;
    let lineage = create_test_lineage(&app).await;

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/species/{}", lineage.species_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to get species: {body:?}");
    assert_eq!(body["name"], "polyxenes");
    assert_eq!(body["binomial"], "Papilio polyxenes");
    assert_eq!(body["mona"], "4159");
    assert_eq!(body["genus"]["level"], "genus");
    assert_eq!(body["genus"]["name"], "Papilio");

    // Reading again yields the same name
    let (_, again) = send_json(
        &app,
        "GET",
        &format!("/api/species/{}", lineage.species_id),
        None,
    )
    .await;
    assert_eq!(again["binomial"], body["binomial"]);
}

#[tokio::test]
async fn test_binomial_follows_genus_rename() {
    let app = setup_test_app().await;
    let lineage = create_test_lineage(&app).await;

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/genera/{}", lineage.genus_id),
        Some(json!({ "name": "Pterourus" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/species/{}", lineage.species_id),
        None,
    )
    .await;
    assert_eq!(body["binomial"], "Pterourus polyxenes");
}

#[tokio::test]
async fn test_subspecies_trinomial() {
    let app = setup_test_app().await;
    let lineage = create_test_lineage(&app).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/subspecies",
        Some(json!({
            "species_id": lineage.species_id,
            "name": "coloro",
            "common_name": "Desert Black Swallowtail",
            "authority": "W. G. Wright, 1905",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create subspecies: {body:?}");
    assert_eq!(body["trinomial"], "Papilio polyxenes coloro");
    assert_eq!(body["species"]["level"], "species");
    assert_eq!(body["species"]["name"], "Papilio polyxenes");

    let (status, body) = send_json(&app, "GET", "/api/subspecies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["trinomial"], "Papilio polyxenes coloro");
}

#[tokio::test]
async fn test_species_subspecies_route() {
    let app = setup_test_app().await;
    let lineage = create_test_lineage(&app).await;

    for name in ["stabilis", "asterius", "coloro"] {
        create_test_record(
            &app,
            "/api/subspecies",
            json!({ "species_id": lineage.species_id, "name": name, "authority": "Test, 1900" }),
        )
        .await;
    }

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/species/{}/subspecies", lineage.species_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "Failed to list subspecies: {body:?}");
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["trinomial"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Papilio polyxenes asterius",
            "Papilio polyxenes coloro",
            "Papilio polyxenes stabilis",
        ]
    );

    let (status, _) = send_json(
        &app,
        "GET",
        &format!("/api/species/{}/subspecies", uuid::Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_taxa_nest_their_parent() {
    let app = setup_test_app().await;
    let lineage = create_test_lineage(&app).await;

    let cases = [
        (format!("/api/families/{}", lineage.family_id), "order", "Lepidoptera"),
        (format!("/api/subfamilies/{}", lineage.subfamily_id), "family", "Papilionidae"),
        (format!("/api/tribes/{}", lineage.tribe_id), "subfamily", "Papilioninae"),
        (format!("/api/genera/{}", lineage.genus_id), "tribe", "Papilionini"),
    ];

    for (uri, parent, name) in cases {
        let (status, body) = send_json(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK, "Failed to get {uri}: {body:?}");
        assert_eq!(body[parent]["level"], parent);
        assert_eq!(body[parent]["name"], name);
    }

    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/families/{}", lineage.family_id),
        None,
    )
    .await;
    assert_eq!(body["order"]["common_name"], "Butterflies and moths");
}

#[tokio::test]
async fn test_taxon_requires_authority() {
    let app = setup_test_app().await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "name": "Lepidoptera" })),
    )
    .await;
    assert!(!status.is_success(), "Order without authority should be rejected");
}

#[tokio::test]
async fn test_deleting_order_cascades_down_the_tree() {
    let app = setup_test_app().await;
    let lineage = create_test_lineage(&app).await;
    let subspecies_id = create_test_record(
        &app,
        "/api/subspecies",
        json!({ "species_id": lineage.species_id, "name": "coloro", "authority": "W. G. Wright, 1905" }),
    )
    .await;

    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/orders/{}", lineage.order_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for uri in [
        format!("/api/families/{}", lineage.family_id),
        format!("/api/subfamilies/{}", lineage.subfamily_id),
        format!("/api/tribes/{}", lineage.tribe_id),
        format!("/api/genera/{}", lineage.genus_id),
        format!("/api/species/{}", lineage.species_id),
        format!("/api/subspecies/{subspecies_id}"),
    ] {
        let (status, _) = send_json(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} survived the cascade");
    }
}
