//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the
//! domain layer.
//!
//! ## Available Repositories
//!
//! - **PgCountryRepository** / **PgPersonRepository** - PostgreSQL tables
//! - **InMemoryCountryRepository** / **InMemoryPersonRepository** - process-local
//!   tables sharing one `InMemoryDatabase`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgCountryRepository, PgPersonRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let country_repo = PgCountryRepository::new(pool.clone());
//!     let person_repo = PgPersonRepository::new(pool.clone());
//! }
//! ```

pub mod country_repository;
pub mod memory;
pub mod person_repository;

pub use country_repository::PgCountryRepository;
pub use memory::{InMemoryCountryRepository, InMemoryDatabase, InMemoryPersonRepository};
pub use person_repository::PgPersonRepository;
