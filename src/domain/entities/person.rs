//! Person entity and repository trait.
//!
//! Maps to the `persons` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::PersonSearch;
use crate::shared::error::AppError;

/// Represents a person record.
///
/// Maps to the `persons` table:
/// - person_id: UUID PRIMARY KEY
/// - person_name: VARCHAR(50) NULL
/// - email: VARCHAR(50) NULL
/// - date_of_birth: DATE NULL
/// - gender: VARCHAR(10) NULL
/// - country_id: UUID NULL REFERENCES countries(country_id)
/// - address: VARCHAR(200) NULL
/// - receive_news_letters: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Primary key, assigned when the person is added
    pub person_id: Uuid,

    pub person_name: Option<String>,

    pub email: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    /// Stored as text (`Male`, `Female`, `Other`)
    pub gender: Option<String>,

    /// Country the person lives in; not enforced to exist
    pub country_id: Option<Uuid>,

    pub address: Option<String>,

    pub receive_news_letters: bool,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            person_id: Uuid::nil(),
            person_name: None,
            email: None,
            date_of_birth: None,
            gender: None,
            country_id: None,
            address: None,
            receive_news_letters: false,
        }
    }
}

impl Person {
    /// Copy every mutable field from `other`, keeping this person's id.
    pub fn overwrite_from(&mut self, other: &Person) {
        self.person_name = other.person_name.clone();
        self.email = other.email.clone();
        self.date_of_birth = other.date_of_birth;
        self.gender = other.gender.clone();
        self.country_id = other.country_id;
        self.address = other.address.clone();
        self.receive_news_letters = other.receive_news_letters;
    }
}

/// Repository trait for Person data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persist a new person.
    async fn create(&self, person: &Person) -> Result<Person, AppError>;

    /// Every stored person, in storage order.
    async fn find_all(&self) -> Result<Vec<Person>, AppError>;

    /// Find a person by id.
    async fn find_by_id(&self, person_id: Uuid) -> Result<Option<Person>, AppError>;

    /// Persons matching the given search predicate.
    async fn find_filtered(&self, search: &PersonSearch) -> Result<Vec<Person>, AppError>;

    /// Overwrite the mutable fields of an existing person.
    ///
    /// Returns `None` when no person has the given id.
    async fn update(&self, person: &Person) -> Result<Option<Person>, AppError>;

    /// Delete a person. Returns whether a row was removed.
    async fn delete(&self, person_id: Uuid) -> Result<bool, AppError>;
}
