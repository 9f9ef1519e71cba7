//! Person Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::parse_id;
use crate::application::dto::{
    PersonAddRequest, PersonListQuery, PersonResponse, PersonUpdateRequest,
};
use crate::application::services::{PersonService, SortOrder};
use crate::domain::SearchField;
use crate::presentation::http::extractors::OptionalJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

const DEFAULT_SORT_FIELD: &str = "PersonName";

/// Searchable field as offered to list views
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFieldResponse {
    pub name: &'static str,
    pub label: &'static str,
}

/// List persons, filtered then sorted.
///
/// Without `sortBy` the list is ordered by name, ascending. An unrecognised
/// `sortOrder` falls back to ascending.
pub async fn list_persons(
    State(state): State<AppState>,
    Query(query): Query<PersonListQuery>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let service = state.person_service();

    let persons = service
        .get_filtered_persons(
            query.search_by.as_deref().unwrap_or_default(),
            query.search_string.as_deref(),
        )
        .await?;

    let sort_by = query.sort_by.as_deref().unwrap_or(DEFAULT_SORT_FIELD);
    let sort_order = query
        .sort_order
        .as_deref()
        .and_then(SortOrder::from_name)
        .unwrap_or_default();

    Ok(Json(service.get_sorted_persons(persons, sort_by, sort_order)))
}

/// Fields accepted by `searchBy`
pub async fn search_fields() -> Json<Vec<SearchFieldResponse>> {
    Json(
        SearchField::ALL
            .iter()
            .map(|field| SearchFieldResponse {
                name: field.name(),
                label: field.label(),
            })
            .collect(),
    )
}

/// Add a person
pub async fn add_person(
    State(state): State<AppState>,
    OptionalJson(body): OptionalJson<PersonAddRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    let person = state.person_service().add_person(body).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Get person by ID
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<PersonResponse>, AppError> {
    let person_id = parse_id(&person_id, "person")?;

    state
        .person_service()
        .get_person_by_id(Some(person_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Person not found".into()))
}

/// Update person
///
/// The id in the path wins over any `PersonID` in the body.
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    OptionalJson(body): OptionalJson<PersonUpdateRequest>,
) -> Result<Json<PersonResponse>, AppError> {
    let person_id = parse_id(&person_id, "person")?;

    let request = body.map(|mut request| {
        request.person_id = person_id;
        request
    });

    let person = state.person_service().update_person(request).await?;
    Ok(Json(person))
}

/// Delete person
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let person_id = parse_id(&person_id, "person")?;

    if state.person_service().delete_person(Some(person_id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Person not found".into()))
    }
}
