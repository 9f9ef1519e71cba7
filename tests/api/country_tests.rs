//! Country API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use person_directory::application::dto::CountryResponse;

use crate::common::TestApp;

#[tokio::test]
async fn test_add_country_returns_created() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/countries")
        .json(&json!({ "CountryName": "Japan" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let country: CountryResponse = response.json();
    assert_ne!(country.country_id, Uuid::nil());
    assert_eq!(country.country_name.as_deref(), Some("Japan"));
}

#[tokio::test]
async fn test_add_country_empty_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.post("/api/countries").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_country_missing_name_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.post("/api/countries").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_duplicate_country_is_conflict() {
    let app = TestApp::new();
    app.add_country("USA").await;

    let response = app
        .server
        .post("/api/countries")
        .json(&json!({ "CountryName": "USA" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let json: Value = response.json();
    assert_eq!(json["code"], 10005);
}

#[tokio::test]
async fn test_list_countries_contains_added() {
    let app = TestApp::new();

    let empty: Vec<CountryResponse> = app.server.get("/api/countries").await.json();
    assert!(empty.is_empty());

    let usa = app.add_country("USA").await;
    let japan = app.add_country("Japan").await;

    let countries: Vec<CountryResponse> = app.server.get("/api/countries").await.json();
    assert_eq!(countries, vec![usa, japan]);
}

#[tokio::test]
async fn test_get_country_by_id() {
    let app = TestApp::new();
    let japan = app.add_country("Japan").await;

    let response = app
        .server
        .get(&format!("/api/countries/{}", japan.country_id))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<CountryResponse>(), japan);
}

#[tokio::test]
async fn test_get_unknown_country_is_not_found() {
    let app = TestApp::new();

    app.server
        .get(&format!("/api/countries/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_country_malformed_id_is_bad_request() {
    let app = TestApp::new();

    app.server
        .get("/api/countries/not-a-uuid")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
