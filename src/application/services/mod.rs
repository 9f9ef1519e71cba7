//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CountryService**: Country directory (add, list, lookup)
//! - **PersonService**: Person directory (CRUD, search, sort)

pub mod country_service;
pub mod person_service;
pub mod person_sorter;

// Re-export country service types
pub use country_service::{CountryError, CountryService, CountryServiceImpl};

// Re-export person service types
pub use person_service::{PersonError, PersonService, PersonServiceImpl};
pub use person_sorter::{sort_persons, SortField, SortOrder};
