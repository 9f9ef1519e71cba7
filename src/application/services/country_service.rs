//! Country Service
//!
//! Manages the reference list of countries.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::dto::{CountryAddRequest, CountryResponse};
use crate::domain::CountryRepository;
use crate::shared::error::AppError;

/// Country service trait
#[async_trait]
pub trait CountryService: Send + Sync {
    /// Add a country; the id is generated here
    async fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<CountryResponse, CountryError>;

    /// All countries in storage order
    async fn get_all_countries(&self) -> Result<Vec<CountryResponse>, CountryError>;

    /// Country by id; `None` when the id is absent or unknown
    async fn get_country_by_id(
        &self,
        country_id: Option<Uuid>,
    ) -> Result<Option<CountryResponse>, CountryError>;

    /// Country by exact name
    async fn get_country_by_name(
        &self,
        country_name: &str,
    ) -> Result<Option<CountryResponse>, CountryError>;
}

/// Country service errors
#[derive(Debug, thiserror::Error)]
pub enum CountryError {
    #[error("Country request is required")]
    NullArgument,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Given country name already exists: {0}")]
    DuplicateName(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CountryService implementation
pub struct CountryServiceImpl<C>
where
    C: CountryRepository + ?Sized,
{
    country_repo: Arc<C>,
}

impl<C> CountryServiceImpl<C>
where
    C: CountryRepository + ?Sized,
{
    pub fn new(country_repo: Arc<C>) -> Self {
        Self { country_repo }
    }
}

#[async_trait]
impl<C> CountryService for CountryServiceImpl<C>
where
    C: CountryRepository + ?Sized + 'static,
{
    async fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<CountryResponse, CountryError> {
        let request = request.ok_or(CountryError::NullArgument)?;

        let name = request
            .country_name
            .as_deref()
            .ok_or_else(|| CountryError::InvalidArgument("Country name is required".into()))?;

        let existing = self
            .country_repo
            .find_by_name(name)
            .await
            .map_err(|e| CountryError::Internal(e.to_string()))?;

        if existing.is_some() {
            return Err(CountryError::DuplicateName(name.to_string()));
        }

        let mut country = request.to_country();
        country.country_id = Uuid::new_v4();

        let created = self
            .country_repo
            .create(&country)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => CountryError::DuplicateName(name.to_string()),
                e => CountryError::Internal(e.to_string()),
            })?;

        tracing::info!(country_id = %created.country_id, "Country added");

        Ok(CountryResponse::from(created))
    }

    async fn get_all_countries(&self) -> Result<Vec<CountryResponse>, CountryError> {
        let countries = self
            .country_repo
            .find_all()
            .await
            .map_err(|e| CountryError::Internal(e.to_string()))?;

        Ok(countries.into_iter().map(CountryResponse::from).collect())
    }

    async fn get_country_by_id(
        &self,
        country_id: Option<Uuid>,
    ) -> Result<Option<CountryResponse>, CountryError> {
        let Some(country_id) = country_id else {
            return Ok(None);
        };

        let country = self
            .country_repo
            .find_by_id(country_id)
            .await
            .map_err(|e| CountryError::Internal(e.to_string()))?;

        Ok(country.map(CountryResponse::from))
    }

    async fn get_country_by_name(
        &self,
        country_name: &str,
    ) -> Result<Option<CountryResponse>, CountryError> {
        let country = self
            .country_repo
            .find_by_name(country_name)
            .await
            .map_err(|e| CountryError::Internal(e.to_string()))?;

        Ok(country.map(CountryResponse::from))
    }
}
