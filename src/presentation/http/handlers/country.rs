//! Country Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::{CountryAddRequest, CountryResponse};
use crate::application::services::CountryService;
use crate::presentation::http::extractors::OptionalJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all countries
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryResponse>>, AppError> {
    let countries = state.country_service().get_all_countries().await?;
    Ok(Json(countries))
}

/// Add a country
pub async fn add_country(
    State(state): State<AppState>,
    OptionalJson(body): OptionalJson<CountryAddRequest>,
) -> Result<(StatusCode, Json<CountryResponse>), AppError> {
    let country = state.country_service().add_country(body).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

/// Get country by ID
pub async fn get_country(
    State(state): State<AppState>,
    Path(country_id): Path<String>,
) -> Result<Json<CountryResponse>, AppError> {
    let country_id = parse_id(&country_id, "country")?;

    state
        .country_service()
        .get_country_by_id(Some(country_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Country not found".into()))
}
