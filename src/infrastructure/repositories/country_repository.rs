//! Country Repository Implementation
//!
//! PostgreSQL implementation of the CountryRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Country, CountryRepository};
use crate::shared::error::AppError;

/// Database row representation of the countries table.
#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    country_id: Uuid,
    country_name: Option<String>,
}

impl CountryRow {
    fn into_country(self) -> Country {
        Country {
            country_id: self.country_id,
            country_name: self.country_name,
        }
    }
}

/// PostgreSQL country repository implementation.
#[derive(Clone)]
pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    /// Create a new PgCountryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn create(&self, country: &Country) -> Result<Country, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            INSERT INTO countries (country_id, country_name)
            VALUES ($1, $2)
            RETURNING country_id, country_name
            "#,
        )
        .bind(country.country_id)
        .bind(&country.country_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Country with this name already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        tracing::debug!(country_id = %row.country_id, "Inserted country row");

        Ok(row.into_country())
    }

    async fn find_all(&self) -> Result<Vec<Country>, AppError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT country_id, country_name
            FROM countries
            ORDER BY created_at, country_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CountryRow::into_country).collect())
    }

    async fn find_by_id(&self, country_id: Uuid) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT country_id, country_name
            FROM countries
            WHERE country_id = $1
            "#,
        )
        .bind(country_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CountryRow::into_country))
    }

    async fn find_by_name(&self, country_name: &str) -> Result<Option<Country>, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT country_id, country_name
            FROM countries
            WHERE country_name = $1
            "#,
        )
        .bind(country_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CountryRow::into_country))
    }
}
