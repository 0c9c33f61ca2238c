//! Error types for classifier configuration.
//!
//! Classification itself never fails: a request that matches no interaction
//! produces the empty [`InteractionInfo`](crate::InteractionInfo). The errors
//! here surface at startup, while the oracle and configuration are built.
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `InvalidFhirVersion` | A version string is not a known FHIR release |
//! | `EmptyResourceTypeTable` | The release's table is not compiled into this build |
//! | `InvalidLogLevel` | The configured log level is not a tracing level |

use thiserror::Error;

use crate::fhir_types::FhirVersion;

/// Configuration errors raised while building a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value is not a recognized FHIR release name or version number.
    #[error("Invalid FHIR version '{0}' (expected one of R4, R4B, R5, R6)")]
    InvalidFhirVersion(String),

    /// The resource-type table for this release is not available.
    #[error("No resource types available for FHIR {version}; build with the `{version}` feature")]
    EmptyResourceTypeTable {
        /// The release that was requested.
        version: FhirVersion,
    },

    /// The value is not a tracing level.
    #[error("Invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error returned when parsing an unknown interaction code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown FHIR interaction '{0}'")]
pub struct ParseInteractionKindError(pub String);
