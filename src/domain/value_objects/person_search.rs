//! Person search predicate.
//!
//! A search is a field plus a term. It is evaluated in-process by the
//! in-memory store and rendered to SQL by the PostgreSQL repository, so
//! both backends agree on what matches.

use chrono::NaiveDate;

use crate::domain::entities::Person;

/// Display format of a date of birth when searched as text, e.g. `28 May 2002`.
pub const DATE_OF_BIRTH_SEARCH_FORMAT: &str = "%d %B %Y";

/// Fields a person list can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    PersonName,
    Email,
    DateOfBirth,
    Gender,
    /// Searches the resolved country name, not the id
    Country,
    Address,
}

impl SearchField {
    /// Every searchable field, in display order.
    pub const ALL: [SearchField; 6] = [
        SearchField::PersonName,
        SearchField::Email,
        SearchField::DateOfBirth,
        SearchField::Gender,
        SearchField::Country,
        SearchField::Address,
    ];

    /// Resolve a field from its API name. Unknown names yield `None`.
    ///
    /// `CountryID` is accepted as an alias for `Country` since list views
    /// key the country column by id.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PersonName" | "person_name" => Some(SearchField::PersonName),
            "Email" | "email" => Some(SearchField::Email),
            "DateOfBirth" | "date_of_birth" => Some(SearchField::DateOfBirth),
            "Gender" | "gender" => Some(SearchField::Gender),
            "CountryID" | "Country" | "country_id" | "country" => Some(SearchField::Country),
            "Address" | "address" => Some(SearchField::Address),
            _ => None,
        }
    }

    /// API name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::PersonName => "PersonName",
            SearchField::Email => "Email",
            SearchField::DateOfBirth => "DateOfBirth",
            SearchField::Gender => "Gender",
            SearchField::Country => "CountryID",
            SearchField::Address => "Address",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::PersonName => "Person Name",
            SearchField::Email => "Email",
            SearchField::DateOfBirth => "Date of Birth",
            SearchField::Gender => "Gender",
            SearchField::Country => "Country",
            SearchField::Address => "Address",
        }
    }
}

/// Case-insensitive substring search over one person field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSearch {
    field: SearchField,
    term: String,
}

impl PersonSearch {
    /// Build a search from raw query parameters.
    ///
    /// Returns `None` when the field is unknown or the term is empty,
    /// meaning no filtering applies.
    pub fn new(search_by: &str, search_string: Option<&str>) -> Option<Self> {
        let field = SearchField::from_name(search_by)?;
        let term = search_string.filter(|s| !s.is_empty())?;
        Some(Self {
            field,
            term: term.to_string(),
        })
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Evaluate the predicate against a person.
    ///
    /// `country_name` is the name resolved from the person's country id.
    /// A person whose searched field is absent never matches.
    pub fn matches(&self, person: &Person, country_name: Option<&str>) -> bool {
        let haystack = match self.field {
            SearchField::PersonName => person.person_name.clone(),
            SearchField::Email => person.email.clone(),
            SearchField::DateOfBirth => person.date_of_birth.map(format_date_of_birth),
            SearchField::Gender => person.gender.clone(),
            SearchField::Country => country_name.map(str::to_string),
            SearchField::Address => person.address.clone(),
        };

        haystack
            .map(|value| contains_ignore_case(&value, &self.term))
            .unwrap_or(false)
    }
}

/// Render a date of birth the way it is searched.
pub fn format_date_of_birth(date: NaiveDate) -> String {
    date.format(DATE_OF_BIRTH_SEARCH_FORMAT).to_string()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use uuid::Uuid;

    fn person() -> Person {
        Person {
            person_id: Uuid::new_v4(),
            person_name: Some("Marguerite Blake".into()),
            email: Some("MBlake@Example.com".into()),
            date_of_birth: NaiveDate::from_ymd_opt(2002, 5, 28),
            gender: Some("Female".into()),
            country_id: Some(Uuid::new_v4()),
            address: Some("12 Harbour Road".into()),
            receive_news_letters: true,
        }
    }

    #[test_case("PersonName" => Some(SearchField::PersonName); "person name")]
    #[test_case("email" => Some(SearchField::Email); "snake case email")]
    #[test_case("CountryID" => Some(SearchField::Country); "country id alias")]
    #[test_case("Country" => Some(SearchField::Country); "country")]
    #[test_case("ReceiveNewsLetters" => None; "not searchable")]
    #[test_case("" => None; "empty")]
    fn test_from_name(name: &str) -> Option<SearchField> {
        SearchField::from_name(name)
    }

    #[test]
    fn test_new_requires_term() {
        assert!(PersonSearch::new("PersonName", None).is_none());
        assert!(PersonSearch::new("PersonName", Some("")).is_none());
        assert!(PersonSearch::new("Bogus", Some("x")).is_none());
        assert!(PersonSearch::new("PersonName", Some("x")).is_some());
    }

    #[test_case("PersonName", "blake" => true; "name lower case")]
    #[test_case("PersonName", "zed" => false; "name miss")]
    #[test_case("Email", "example.COM" => true; "email mixed case")]
    #[test_case("DateOfBirth", "may 2002" => true; "date month year")]
    #[test_case("DateOfBirth", "28 May" => true; "date day month")]
    #[test_case("DateOfBirth", "2003" => false; "date miss")]
    #[test_case("Gender", "fem" => true; "gender prefix")]
    #[test_case("Gender", "male" => true; "gender substring")]
    #[test_case("CountryID", "land" => true; "country name")]
    #[test_case("Address", "HARBOUR" => true; "address upper case")]
    fn test_matches(field: &str, term: &str) -> bool {
        let search = PersonSearch::new(field, Some(term)).unwrap();
        search.matches(&person(), Some("Iceland"))
    }

    #[test]
    fn test_absent_field_never_matches() {
        let mut p = person();
        p.email = None;
        let search = PersonSearch::new("Email", Some("a")).unwrap();
        assert!(!search.matches(&p, None));

        let search = PersonSearch::new("Country", Some("a")).unwrap();
        assert!(!search.matches(&p, None));
    }

    #[test]
    fn test_format_date_of_birth() {
        let date = NaiveDate::from_ymd_opt(2002, 5, 8).unwrap();
        assert_eq!(format_date_of_birth(date), "08 May 2002");
    }

    #[test]
    fn test_names_resolve_back() {
        for field in SearchField::ALL {
            assert_eq!(SearchField::from_name(field.name()), Some(field));
        }
    }
}
