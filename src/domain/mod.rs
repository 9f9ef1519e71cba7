//! # Domain Layer
//!
//! The domain layer holds the person and country records and the data
//! access contracts the services depend on. It is independent of any
//! external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Persisted records (Country, Person) and repository traits
//! - **value_objects**: Immutable value types (Gender, PersonSearch)

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
