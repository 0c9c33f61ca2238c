//! Classifier configuration.
//!
//! Supports programmatic construction, command line arguments and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `INTERACTIONS_FHIR_VERSION` | R4 | FHIR release whose resource types are recognized |
//! | `INTERACTIONS_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use helios_interactions::{ClassifierConfig, FhirVersion};
//!
//! let config = ClassifierConfig {
//!     fhir_version: FhirVersion::R4,
//!     ..Default::default()
//! };
//! let classifier = config.build_classifier()?;
//! assert!(!classifier.classify("GET", "/Patient").is_empty());
//! # Ok::<(), helios_interactions::ConfigError>(())
//! ```

use clap::Parser;

use crate::error::{ConfigError, ConfigResult};
use crate::fhir_types::FhirVersion;
use crate::routing::InteractionClassifier;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for building an [`InteractionClassifier`].
#[derive(Debug, Clone, Parser)]
pub struct ClassifierConfig {
    /// FHIR release whose resource types are recognized (R4, R4B, R5, R6).
    #[arg(long, env = "INTERACTIONS_FHIR_VERSION", default_value = "R4")]
    pub fhir_version: FhirVersion,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "INTERACTIONS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fhir_version: FhirVersion::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Creates a configuration from environment variables only.
    ///
    /// Command line arguments are ignored; unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self::try_parse_from([env!("CARGO_PKG_NAME")]).unwrap_or_default()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.fhir_version.is_enabled() {
            errors.push(
                ConfigError::EmptyResourceTypeTable {
                    version: self.fhir_version,
                }
                .to_string(),
            );
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(ConfigError::InvalidLogLevel(self.log_level.clone()).to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the classifier for the configured FHIR release.
    ///
    /// Fails when the release's resource-type table is not part of this
    /// build; that is a startup error, not something to classify around.
    pub fn build_classifier(&self) -> ConfigResult<InteractionClassifier> {
        InteractionClassifier::for_version(self.fhir_version)
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            fhir_version: FhirVersion::R4,
            log_level: "debug".to_string(),
        }
    }
}
