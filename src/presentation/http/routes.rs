//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{routing::get, Router};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/countries", country_routes())
        .nest("/persons", person_routes())
}

fn country_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::country::list_countries).post(handlers::country::add_country),
        )
        .route("/{country_id}", get(handlers::country::get_country))
}

fn person_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::person::list_persons).post(handlers::person::add_person),
        )
        .route("/search-fields", get(handlers::person::search_fields))
        .route(
            "/{person_id}",
            get(handlers::person::get_person)
                .put(handlers::person::update_person)
                .delete(handlers::person::delete_person),
        )
}
