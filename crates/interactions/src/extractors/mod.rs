//! Axum extractors for FHIR-specific data.
//!
//! - [`Interaction`] - The FHIR interaction a request was classified as

mod interaction;

pub use interaction::Interaction;
