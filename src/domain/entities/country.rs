//! Country entity and repository trait.
//!
//! Maps to the `countries` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a country that persons may belong to.
///
/// Maps to the `countries` table:
/// - country_id: UUID PRIMARY KEY
/// - country_name: VARCHAR(100) NULL UNIQUE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Primary key, assigned when the country is added
    pub country_id: Uuid,

    /// Display name, unique across countries
    pub country_name: Option<String>,
}

impl Country {
    /// Country name or an empty string when unnamed.
    pub fn display_name(&self) -> &str {
        self.country_name.as_deref().unwrap_or_default()
    }
}

/// Repository trait for Country data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Persist a new country.
    async fn create(&self, country: &Country) -> Result<Country, AppError>;

    /// Every stored country, in storage order.
    async fn find_all(&self) -> Result<Vec<Country>, AppError>;

    /// Find a country by id.
    async fn find_by_id(&self, country_id: Uuid) -> Result<Option<Country>, AppError>;

    /// Find a country by exact name.
    async fn find_by_name(&self, country_name: &str) -> Result<Option<Country>, AppError>;
}
