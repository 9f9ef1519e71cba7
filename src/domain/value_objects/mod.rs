//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **Gender**: gender options accepted by person requests
//! - **PersonSearch**: field + term predicate used to filter persons

mod gender;
mod person_search;

pub use gender::*;
pub use person_search::*;
