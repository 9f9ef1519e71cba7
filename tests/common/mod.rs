//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use fake::faker::address::en::StreetName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

use person_directory::application::dto::{CountryResponse, PersonResponse};
use person_directory::config::Settings;
use person_directory::startup::{build_router, AppState};

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::in_memory(Settings::in_memory());
        let server = TestServer::new(build_router(state)).expect("failed to start test server");
        Self { server }
    }

    /// Add a country and return it
    pub async fn add_country(&self, name: &str) -> CountryResponse {
        self.server
            .post("/api/countries")
            .json(&json!({ "CountryName": name }))
            .await
            .json()
    }

    /// Add a person from a JSON body and return it
    pub async fn add_person(&self, body: Value) -> PersonResponse {
        self.server.post("/api/persons").json(&body).await.json()
    }

    /// List persons with a raw query string
    pub async fn list_persons(&self, query: &str) -> Vec<PersonResponse> {
        self.server
            .get(&format!("/api/persons{}", query))
            .await
            .json()
    }
}

/// A valid add-person body with random name, email and address
pub fn person_body() -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let address: String = StreetName().fake();

    json!({
        "PersonName": name,
        "Email": email,
        "DateOfBirth": "1995-03-14",
        "Gender": "Female",
        "Address": address,
        "ReceiveNewsLetters": true
    })
}

/// A valid add-person body with a fixed name and country
pub fn person_body_named(name: &str, country_id: Option<uuid::Uuid>) -> Value {
    let mut body = person_body();
    body["PersonName"] = json!(name);
    body["CountryID"] = json!(country_id);
    body
}
