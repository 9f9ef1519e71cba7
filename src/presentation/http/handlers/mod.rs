//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod country;
pub mod health;
pub mod person;

use uuid::Uuid;

use crate::application::services::{CountryError, PersonError};
use crate::shared::error::AppError;

impl From<CountryError> for AppError {
    fn from(err: CountryError) -> Self {
        match err {
            CountryError::NullArgument | CountryError::InvalidArgument(_) => {
                AppError::BadRequest(err.to_string())
            }
            CountryError::DuplicateName(_) => AppError::Conflict(err.to_string()),
            CountryError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<PersonError> for AppError {
    fn from(err: PersonError) -> Self {
        match err {
            PersonError::NullArgument(_) | PersonError::EmptyName => {
                AppError::BadRequest(err.to_string())
            }
            PersonError::Validation(messages) => AppError::Validation(messages),
            PersonError::NotFound(_) => AppError::NotFound(err.to_string()),
            PersonError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Parse an id taken from the request path.
fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {} ID", what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn test_country_errors_map_to_status() {
        let cases = [
            (CountryError::NullArgument, StatusCode::BAD_REQUEST),
            (
                CountryError::InvalidArgument("Country name is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CountryError::DuplicateName("Japan".into()),
                StatusCode::CONFLICT,
            ),
            (
                CountryError::Internal("pool closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_person_errors_map_to_status() {
        let cases = [
            (PersonError::NullArgument("Person request"), StatusCode::BAD_REQUEST),
            (PersonError::EmptyName, StatusCode::BAD_REQUEST),
            (
                PersonError::Validation(vec!["Email value should be a valid email".into()]),
                StatusCode::BAD_REQUEST,
            ),
            (PersonError::NotFound(Uuid::new_v4()), StatusCode::NOT_FOUND),
            (
                PersonError::Internal("pool closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "person").unwrap(), id);
        assert!(matches!(
            parse_id("not-a-uuid", "person"),
            Err(AppError::BadRequest(_))
        ));
    }
}
