//! HTTP middleware for the FHIR REST API.
//!
//! - [`interaction`] - Classifies requests into FHIR interactions

pub mod interaction;

pub use interaction::{interaction_middleware, with_interaction_classification};
