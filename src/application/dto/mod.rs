//! Data Transfer Objects
//!
//! Request and response types exchanged with the presentation layer.

pub mod request;
pub mod response;

pub use request::{CountryAddRequest, PersonAddRequest, PersonListQuery, PersonUpdateRequest};
pub use response::{CountryResponse, PersonResponse};
