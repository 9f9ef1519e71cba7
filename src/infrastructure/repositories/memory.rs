//! In-Memory Repositories
//!
//! A process-local store with the same two tables as the database schema.
//! Both repositories share one `InMemoryDatabase` so person searches can
//! resolve country names the way the SQL join does.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{Country, CountryRepository, Person, PersonRepository, PersonSearch};
use crate::shared::error::AppError;

/// Shared in-memory tables, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    countries: RwLock<Vec<Country>>,
    persons: RwLock<Vec<Person>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn country_name(&self, country_id: Option<Uuid>) -> Option<String> {
        let country_id = country_id?;
        self.countries
            .read()
            .iter()
            .find(|c| c.country_id == country_id)
            .and_then(|c| c.country_name.clone())
    }
}

/// In-memory country repository.
#[derive(Clone)]
pub struct InMemoryCountryRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryCountryRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn create(&self, country: &Country) -> Result<Country, AppError> {
        let mut countries = self.db.countries.write();

        if country.country_name.is_some()
            && countries.iter().any(|c| c.country_name == country.country_name)
        {
            return Err(AppError::Conflict(
                "Country with this name already exists".to_string(),
            ));
        }

        countries.push(country.clone());
        Ok(country.clone())
    }

    async fn find_all(&self) -> Result<Vec<Country>, AppError> {
        Ok(self.db.countries.read().clone())
    }

    async fn find_by_id(&self, country_id: Uuid) -> Result<Option<Country>, AppError> {
        Ok(self
            .db
            .countries
            .read()
            .iter()
            .find(|c| c.country_id == country_id)
            .cloned())
    }

    async fn find_by_name(&self, country_name: &str) -> Result<Option<Country>, AppError> {
        Ok(self
            .db
            .countries
            .read()
            .iter()
            .find(|c| c.country_name.as_deref() == Some(country_name))
            .cloned())
    }
}

/// In-memory person repository.
#[derive(Clone)]
pub struct InMemoryPersonRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryPersonRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn create(&self, person: &Person) -> Result<Person, AppError> {
        let mut persons = self.db.persons.write();

        if persons.iter().any(|p| p.person_id == person.person_id) {
            return Err(AppError::Conflict(format!(
                "Person {} already exists",
                person.person_id
            )));
        }

        persons.push(person.clone());
        Ok(person.clone())
    }

    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.db.persons.read().clone())
    }

    async fn find_by_id(&self, person_id: Uuid) -> Result<Option<Person>, AppError> {
        Ok(self
            .db
            .persons
            .read()
            .iter()
            .find(|p| p.person_id == person_id)
            .cloned())
    }

    async fn find_filtered(&self, search: &PersonSearch) -> Result<Vec<Person>, AppError> {
        let persons = self.db.persons.read().clone();

        Ok(persons
            .into_iter()
            .filter(|p| search.matches(p, self.db.country_name(p.country_id).as_deref()))
            .collect())
    }

    async fn update(&self, person: &Person) -> Result<Option<Person>, AppError> {
        let mut persons = self.db.persons.write();

        Ok(persons
            .iter_mut()
            .find(|p| p.person_id == person.person_id)
            .map(|stored| {
                stored.overwrite_from(person);
                stored.clone()
            }))
    }

    async fn delete(&self, person_id: Uuid) -> Result<bool, AppError> {
        let mut persons = self.db.persons.write();
        let before = persons.len();
        persons.retain(|p| p.person_id != person_id);
        Ok(persons.len() < before)
    }
}
