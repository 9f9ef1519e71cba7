//! Person Service
//!
//! Validates, persists and queries person records, composing the country
//! name into every response.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::person_sorter::{sort_persons, SortField, SortOrder};
use crate::application::dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::domain::{CountryRepository, Person, PersonRepository, PersonSearch};
use crate::shared::validation::validate_model;

/// Person service trait
#[async_trait]
pub trait PersonService: Send + Sync {
    /// Add a person; the id is generated here
    async fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonResponse, PersonError>;

    /// All persons with country name and age resolved
    async fn get_all_persons(&self) -> Result<Vec<PersonResponse>, PersonError>;

    /// Person by id; `None` when the id is absent or unknown
    async fn get_person_by_id(
        &self,
        person_id: Option<Uuid>,
    ) -> Result<Option<PersonResponse>, PersonError>;

    /// Persons whose `search_by` field contains `search_string`, ignoring case.
    ///
    /// An unknown field or an empty search string returns every person.
    async fn get_filtered_persons(
        &self,
        search_by: &str,
        search_string: Option<&str>,
    ) -> Result<Vec<PersonResponse>, PersonError>;

    /// Sort a fetched list. An unknown `sort_by` leaves it unchanged.
    fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: &str,
        sort_order: SortOrder,
    ) -> Vec<PersonResponse>;

    /// Overwrite every mutable field of an existing person
    async fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonResponse, PersonError>;

    /// Delete a person. Returns `false` when no person has the id.
    async fn delete_person(&self, person_id: Option<Uuid>) -> Result<bool, PersonError>;
}

/// Person service errors
#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("{0} is required")]
    NullArgument(&'static str),

    #[error("Person name can't be empty")]
    EmptyName,

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Person not found: {0}")]
    NotFound(Uuid),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// PersonService implementation
pub struct PersonServiceImpl<P, C>
where
    P: PersonRepository + ?Sized,
    C: CountryRepository + ?Sized,
{
    person_repo: Arc<P>,
    country_repo: Arc<C>,
}

impl<P, C> PersonServiceImpl<P, C>
where
    P: PersonRepository + ?Sized,
    C: CountryRepository + ?Sized,
{
    pub fn new(person_repo: Arc<P>, country_repo: Arc<C>) -> Self {
        Self {
            person_repo,
            country_repo,
        }
    }

    fn is_empty_name(name: &Option<String>) -> bool {
        name.as_deref().map_or(true, str::is_empty)
    }

    /// Build one response, looking up the person's country.
    async fn compose(&self, person: Person) -> Result<PersonResponse, PersonError> {
        let country = match person.country_id {
            Some(country_id) => self
                .country_repo
                .find_by_id(country_id)
                .await
                .map_err(|e| PersonError::Internal(e.to_string()))?
                .and_then(|c| c.country_name),
            None => None,
        };

        Ok(PersonResponse::from(person).with_country(country))
    }

    /// Build responses for a list, loading the country table once.
    async fn compose_all(&self, persons: Vec<Person>) -> Result<Vec<PersonResponse>, PersonError> {
        let names: HashMap<Uuid, Option<String>> = if persons.iter().any(|p| p.country_id.is_some()) {
            self.country_repo
                .find_all()
                .await
                .map_err(|e| PersonError::Internal(e.to_string()))?
                .into_iter()
                .map(|c| (c.country_id, c.country_name))
                .collect()
        } else {
            HashMap::new()
        };

        let now = Utc::now();
        Ok(persons
            .into_iter()
            .map(|person| {
                let country = person
                    .country_id
                    .and_then(|id| names.get(&id).cloned().flatten());
                PersonResponse::from_person_at(person, now).with_country(country)
            })
            .collect())
    }
}

#[async_trait]
impl<P, C> PersonService for PersonServiceImpl<P, C>
where
    P: PersonRepository + ?Sized + 'static,
    C: CountryRepository + ?Sized + 'static,
{
    async fn add_person(
        &self,
        request: Option<PersonAddRequest>,
    ) -> Result<PersonResponse, PersonError> {
        let request = request.ok_or(PersonError::NullArgument("Person add request"))?;

        if Self::is_empty_name(&request.person_name) {
            return Err(PersonError::EmptyName);
        }

        validate_model(&request).map_err(PersonError::Validation)?;

        let mut person = request.to_person();
        person.person_id = Uuid::new_v4();

        let created = self
            .person_repo
            .create(&person)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?;

        tracing::info!(person_id = %created.person_id, "Person added");

        self.compose(created).await
    }

    async fn get_all_persons(&self) -> Result<Vec<PersonResponse>, PersonError> {
        tracing::info!("Fetching all persons");

        let persons = self
            .person_repo
            .find_all()
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?;

        self.compose_all(persons).await
    }

    async fn get_person_by_id(
        &self,
        person_id: Option<Uuid>,
    ) -> Result<Option<PersonResponse>, PersonError> {
        let Some(person_id) = person_id else {
            return Ok(None);
        };

        let person = self
            .person_repo
            .find_by_id(person_id)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?;

        match person {
            Some(person) => Ok(Some(self.compose(person).await?)),
            None => Ok(None),
        }
    }

    async fn get_filtered_persons(
        &self,
        search_by: &str,
        search_string: Option<&str>,
    ) -> Result<Vec<PersonResponse>, PersonError> {
        let Some(search) = PersonSearch::new(search_by, search_string) else {
            return self.get_all_persons().await;
        };

        tracing::info!(
            search_by = search.field().name(),
            search_string = search.term(),
            "Filtering persons"
        );

        let persons = self
            .person_repo
            .find_filtered(&search)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?;

        self.compose_all(persons).await
    }

    fn get_sorted_persons(
        &self,
        persons: Vec<PersonResponse>,
        sort_by: &str,
        sort_order: SortOrder,
    ) -> Vec<PersonResponse> {
        match SortField::from_name(sort_by) {
            Some(field) => sort_persons(persons, field, sort_order),
            None => persons,
        }
    }

    async fn update_person(
        &self,
        request: Option<PersonUpdateRequest>,
    ) -> Result<PersonResponse, PersonError> {
        let request = request.ok_or(PersonError::NullArgument("Person update request"))?;

        validate_model(&request).map_err(PersonError::Validation)?;

        let mut existing = self
            .person_repo
            .find_by_id(request.person_id)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?
            .ok_or(PersonError::NotFound(request.person_id))?;

        if Self::is_empty_name(&request.person_name) {
            return Err(PersonError::EmptyName);
        }

        existing.overwrite_from(&request.to_person());

        let updated = self
            .person_repo
            .update(&existing)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?
            .ok_or(PersonError::NotFound(request.person_id))?;

        tracing::info!(person_id = %updated.person_id, "Person updated");

        self.compose(updated).await
    }

    async fn delete_person(&self, person_id: Option<Uuid>) -> Result<bool, PersonError> {
        let person_id = person_id.ok_or(PersonError::NullArgument("Person id"))?;

        let existing = self
            .person_repo
            .find_by_id(person_id)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?;

        if existing.is_none() {
            return Ok(false);
        }

        let deleted = self
            .person_repo
            .delete(person_id)
            .await
            .map_err(|e| PersonError::Internal(e.to_string()))?;

        tracing::info!(person_id = %person_id, deleted, "Person deleted");

        Ok(deleted)
    }
}
