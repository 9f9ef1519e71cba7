//! # Person Directory Library
//!
//! A layered directory of persons and the countries they live in:
//! - RESTful JSON API endpoints
//! - PostgreSQL or in-memory storage behind repository traits
//! - Search by field and multi-column sorting of person lists
//!
//! ## Architecture
//!
//! - **Domain Layer**: Country and Person entities, repository traits, search predicate
//! - **Application Layer**: Country and Person services and DTOs
//! - **Infrastructure Layer**: Database pool and repository implementations
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! person_directory/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
