//! Person list ordering.
//!
//! Sorting happens on already-composed responses because two of the keys
//! (age and country name) are derived and never stored.

use std::cmp::Ordering;

use crate::application::dto::PersonResponse;

/// Columns a person list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    PersonName,
    Email,
    DateOfBirth,
    Age,
    Gender,
    Country,
    Address,
    ReceiveNewsLetters,
}

impl SortField {
    /// Resolve a field from its API name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PersonName" | "person_name" => Some(SortField::PersonName),
            "Email" | "email" => Some(SortField::Email),
            "DateOfBirth" | "date_of_birth" => Some(SortField::DateOfBirth),
            "Age" | "age" => Some(SortField::Age),
            "Gender" | "gender" => Some(SortField::Gender),
            "Country" | "CountryID" | "country" => Some(SortField::Country),
            "Address" | "address" => Some(SortField::Address),
            "ReceiveNewsLetters" | "receive_news_letters" => Some(SortField::ReceiveNewsLetters),
            _ => None,
        }
    }

    fn compare(&self, a: &PersonResponse, b: &PersonResponse) -> Ordering {
        match self {
            SortField::PersonName => cmp_text(&a.person_name, &b.person_name),
            SortField::Email => cmp_text(&a.email, &b.email),
            SortField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Gender => cmp_text(&a.gender, &b.gender),
            SortField::Country => cmp_text(&a.country, &b.country),
            SortField::Address => cmp_text(&a.address, &b.address),
            SortField::ReceiveNewsLetters => a.receive_news_letters.cmp(&b.receive_news_letters),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `ASC`/`DESC`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if name.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }
}

/// Stable sort of `persons` by `field` in the given direction.
///
/// Absent values order before present ones when ascending.
pub fn sort_persons(
    mut persons: Vec<PersonResponse>,
    field: SortField,
    order: SortOrder,
) -> Vec<PersonResponse> {
    persons.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    persons
}

fn cmp_text(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
