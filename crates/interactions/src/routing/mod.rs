//! Request classification for the FHIR REST API.
//!
//! This module maps an HTTP method and URL path onto the FHIR interaction
//! it addresses:
//!
//! - `patterns` - Tail-anchored path shapes
//! - `matchers` - One matcher per interaction, in priority order
//! - [`classifier`] - The dispatch loop over the matchers

pub mod classifier;
pub(crate) mod matchers;
pub(crate) mod patterns;

pub use classifier::InteractionClassifier;
