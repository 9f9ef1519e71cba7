//! # Domain Entities
//!
//! Core domain entities. Both map directly to their database tables.
//!
//! - **Country**: reference list of countries
//! - **Person**: a person record, optionally linked to a country
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod country;
mod person;

pub use country::{Country, CountryRepository};
pub use person::{Person, PersonRepository};

#[cfg(test)]
pub use country::MockCountryRepository;
#[cfg(test)]
pub use person::MockPersonRepository;
