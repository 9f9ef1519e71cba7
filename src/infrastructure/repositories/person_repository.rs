//! Person Repository Implementation
//!
//! PostgreSQL implementation of the PersonRepository trait.
//! Search predicates are rendered to `ILIKE` so filtering happens in the database.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Person, PersonRepository, PersonSearch, SearchField};
use crate::shared::error::AppError;

const PERSON_COLUMNS: &str = "p.person_id, p.person_name, p.email, p.date_of_birth, p.gender, \
                              p.country_id, p.address, p.receive_news_letters";

/// Database row representation of the persons table.
#[derive(Debug, sqlx::FromRow)]
struct PersonRow {
    person_id: Uuid,
    person_name: Option<String>,
    email: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    country_id: Option<Uuid>,
    address: Option<String>,
    receive_news_letters: bool,
}

impl PersonRow {
    fn into_person(self) -> Person {
        Person {
            person_id: self.person_id,
            person_name: self.person_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            country_id: self.country_id,
            address: self.address,
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// SQL expression yielding the searched text for a field.
///
/// Dates use the same `28 May 2002` rendering as the in-memory predicate.
fn search_expression(field: SearchField) -> &'static str {
    match field {
        SearchField::PersonName => "p.person_name",
        SearchField::Email => "p.email",
        SearchField::DateOfBirth => "to_char(p.date_of_birth, 'DD FMMonth YYYY')",
        SearchField::Gender => "p.gender",
        SearchField::Country => "c.country_name",
        SearchField::Address => "p.address",
    }
}

/// Wrap a search term in `%` after escaping LIKE metacharacters.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// PostgreSQL person repository implementation.
#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    /// Create a new PgPersonRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn create(&self, person: &Person) -> Result<Person, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
            INSERT INTO persons (person_id, person_name, email, date_of_birth, gender,
                                 country_id, address, receive_news_letters)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING person_id, person_name, email, date_of_birth, gender,
                      country_id, address, receive_news_letters
            "#,
        )
        .bind(person.person_id)
        .bind(&person.person_name)
        .bind(&person.email)
        .bind(person.date_of_birth)
        .bind(&person.gender)
        .bind(person.country_id)
        .bind(&person.address)
        .bind(person.receive_news_letters)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(person_id = %row.person_id, "Inserted person row");

        Ok(row.into_person())
    }

    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let sql = format!(
            "SELECT {} FROM persons p ORDER BY p.created_at, p.person_id",
            PERSON_COLUMNS
        );
        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PersonRow::into_person).collect())
    }

    async fn find_by_id(&self, person_id: Uuid) -> Result<Option<Person>, AppError> {
        let sql = format!("SELECT {} FROM persons p WHERE p.person_id = $1", PERSON_COLUMNS);
        let row = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(person_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(PersonRow::into_person))
    }

    async fn find_filtered(&self, search: &PersonSearch) -> Result<Vec<Person>, AppError> {
        let sql = format!(
            r#"
            SELECT {}
            FROM persons p
            LEFT JOIN countries c ON c.country_id = p.country_id
            WHERE {} ILIKE $1 ESCAPE '\'
            ORDER BY p.created_at, p.person_id
            "#,
            PERSON_COLUMNS,
            search_expression(search.field())
        );

        tracing::debug!(field = search.field().name(), "Filtering person rows");

        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(like_pattern(search.term()))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PersonRow::into_person).collect())
    }

    async fn update(&self, person: &Person) -> Result<Option<Person>, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(
            r#"
            UPDATE persons
            SET person_name = $2,
                email = $3,
                date_of_birth = $4,
                gender = $5,
                country_id = $6,
                address = $7,
                receive_news_letters = $8
            WHERE person_id = $1
            RETURNING person_id, person_name, email, date_of_birth, gender,
                      country_id, address, receive_news_letters
            "#,
        )
        .bind(person.person_id)
        .bind(&person.person_name)
        .bind(&person.email)
        .bind(person.date_of_birth)
        .bind(&person.gender)
        .bind(person.country_id)
        .bind(&person.address)
        .bind(person.receive_news_letters)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PersonRow::into_person))
    }

    async fn delete(&self, person_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM persons WHERE person_id = $1")
            .bind(person_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
