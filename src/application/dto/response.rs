//! Response DTOs
//!
//! Read-only projections returned to callers, including derived fields.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::request::PersonUpdateRequest;
use crate::domain::{Country, Gender, Person};

/// Length of a year in days used for age calculation.
const DAYS_PER_YEAR: f64 = 365.25;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Country response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    #[serde(rename = "CountryID")]
    pub country_id: Uuid,

    #[serde(rename = "CountryName")]
    pub country_name: Option<String>,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            country_id: country.country_id,
            country_name: country.country_name,
        }
    }
}

/// Person response
///
/// `country` is filled in by the person service after resolving
/// `country_id`; the plain conversions leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonResponse {
    #[serde(rename = "PersonID")]
    pub person_id: Uuid,
    pub person_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    #[serde(rename = "CountryID")]
    pub country_id: Option<Uuid>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
    pub age: Option<i64>,
}

impl PersonResponse {
    /// Build a response, computing age against the given instant.
    pub fn from_person_at(person: Person, now: DateTime<Utc>) -> Self {
        Self {
            person_id: person.person_id,
            age: person.date_of_birth.map(|dob| age_at(dob, now)),
            person_name: person.person_name,
            email: person.email,
            date_of_birth: person.date_of_birth,
            gender: person.gender,
            country_id: person.country_id,
            country: None,
            address: person.address,
            receive_news_letters: person.receive_news_letters,
        }
    }

    /// Attach the resolved country name.
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    /// Prefill an update request from this response.
    ///
    /// Stored gender values outside the known options are dropped.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            person_id: self.person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.as_deref().and_then(Gender::parse),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_news_letters: self.receive_news_letters,
        }
    }
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self::from_person_at(person, Utc::now())
    }
}

/// Age in whole years: elapsed days divided by 365.25, rounded half to even.
pub fn age_at(date_of_birth: NaiveDate, now: DateTime<Utc>) -> i64 {
    let born = date_of_birth.and_time(NaiveTime::MIN);
    let elapsed_days = (now.naive_utc() - born).num_seconds() as f64 / SECONDS_PER_DAY;
    (elapsed_days / DAYS_PER_YEAR).round_ties_even() as i64
}
