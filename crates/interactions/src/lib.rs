//! # helios-interactions - FHIR REST interaction classification
//!
//! This crate maps an incoming HTTP request (method + URL path) onto the
//! [FHIR RESTful API](https://hl7.org/fhir/http.html) interaction it
//! addresses, extracting the resource type, resource id and version id
//! carried in the path. Route handlers then pick business logic from the
//! interaction and resource type instead of re-parsing URLs.
//!
//! ## Recognized Interactions
//!
//! Matchers are tried in this order; the first match wins.
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | capabilities | GET | `.../metadata` |
//! | read | GET | `/[type]/[id]` |
//! | vread | GET | `/[type]/[id]/_history/[vid]` |
//! | create | POST | `/[type]` |
//! | search-type | GET/POST | `/[type]` or `/[type]/_search` |
//! | update | PUT | `/[type]/[id]` |
//! | patch | PATCH | `/[type]/[id]` |
//! | delete | DELETE | `/[type]/[id]` |
//!
//! Patterns are matched against the end of the path, so the API may be
//! mounted under any prefix. Resource types must be known to the configured
//! [`ResourceTypeOracle`]; a path naming an unknown type, a method outside
//! the table or any other shape classifies as [`InteractionInfo::empty`].
//!
//! ## FHIR Version Support
//!
//! Resource-type tables are selected with feature flags:
//!
//! - `R4` - FHIR R4 (4.0.1) - Default
//! - `R4B` - FHIR R4B (4.3.0)
//! - `R5` - FHIR R5 (5.0.0)
//! - `R6` - FHIR R6 (6.0.0-ballot)
//!
//! ## Quick Start
//!
//! ```rust
//! use helios_interactions::{FhirVersion, InteractionClassifier, InteractionKind};
//!
//! let classifier = InteractionClassifier::for_version(FhirVersion::R4)?;
//!
//! let info = classifier.classify("POST", "/fhir/Patient/_search");
//! assert_eq!(info.interaction(), Some(InteractionKind::SearchType));
//! assert_eq!(info.resource_type(), Some("Patient"));
//! # Ok::<(), helios_interactions::ConfigError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`interaction`] - The classification result
//! - [`fhir_types`] - Resource-type tables and the oracle trait
//! - [`routing`] - Path patterns, matchers and the classifier
//! - [`middleware`] - Axum middleware storing the classification per request
//! - [`extractors`] - Axum extractor reading it back in handlers
//! - [`config`] - Classifier configuration
//! - [`error`] - Configuration errors

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod fhir_types;
pub mod interaction;
pub mod middleware;
pub mod routing;

// Re-export commonly used types
pub use config::ClassifierConfig;
pub use error::{ConfigError, ConfigResult};
pub use fhir_types::{FhirVersion, ResourceTypeOracle, StaticResourceTypes};
pub use interaction::{InteractionInfo, InteractionKind};
pub use middleware::with_interaction_classification;
pub use routing::InteractionClassifier;

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. Output goes to stderr
/// so that it never interleaves with data written to stdout.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "helios_interactions={level},helios_classify={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
