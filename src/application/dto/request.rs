//! Request DTOs
//!
//! Data structures for add/update request bodies and list query strings.
//! Field names are PascalCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Country, Gender, Person};

/// Add country request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    /// Convert into a Country entity with an unassigned id.
    pub fn to_country(&self) -> Country {
        Country {
            country_id: Uuid::nil(),
            country_name: self.country_name.clone(),
        }
    }
}

/// Add person request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PersonAddRequest {
    #[validate(length(max = 50, message = "Person name can't be longer than 50 characters"))]
    pub person_name: Option<String>,

    #[validate(
        email(message = "Email value should be a valid email"),
        length(max = 50, message = "Email can't be longer than 50 characters")
    )]
    pub email: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<Gender>,

    #[serde(rename = "CountryID")]
    pub country_id: Option<Uuid>,

    #[validate(length(max = 200, message = "Address can't be longer than 200 characters"))]
    pub address: Option<String>,

    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonAddRequest {
    /// Convert into a Person entity with an unassigned id.
    pub fn to_person(&self) -> Person {
        Person {
            person_id: Uuid::nil(),
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|g| g.as_str().to_string()),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// Update person request
///
/// Carries the full set of mutable fields; every one overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PersonUpdateRequest {
    /// Target id. May be omitted when the caller supplies it out of band.
    #[serde(rename = "PersonID", default)]
    pub person_id: Uuid,

    #[validate(length(max = 50, message = "Person name can't be longer than 50 characters"))]
    pub person_name: Option<String>,

    #[validate(
        email(message = "Email value should be a valid email"),
        length(max = 50, message = "Email can't be longer than 50 characters")
    )]
    pub email: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub gender: Option<Gender>,

    #[serde(rename = "CountryID")]
    pub country_id: Option<Uuid>,

    #[validate(length(max = 200, message = "Address can't be longer than 200 characters"))]
    pub address: Option<String>,

    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonUpdateRequest {
    /// Convert into a Person entity carrying the target id.
    pub fn to_person(&self) -> Person {
        Person {
            person_id: self.person_id,
            person_name: self.person_name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|g| g.as_str().to_string()),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_news_letters: self.receive_news_letters,
        }
    }
}

/// Person list query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonListQuery {
    pub search_by: Option<String>,
    pub search_string: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
