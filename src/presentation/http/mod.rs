//! HTTP API
//!
//! JSON endpoints over the country and person services.

pub mod extractors;
pub mod handlers;
pub mod routes;
