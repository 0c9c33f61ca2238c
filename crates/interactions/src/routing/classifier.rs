//! The interaction classifier.
//!
//! Tries the interaction matchers in priority order and returns the first
//! result. Classification is pure and synchronous; a single classifier can be
//! shared by any number of request tasks.

use axum::http::Request;
use tracing::trace;

use super::matchers::PATH_MATCHERS;
use crate::error::ConfigResult;
use crate::fhir_types::{FhirVersion, ResourceTypeOracle, StaticResourceTypes};
use crate::interaction::InteractionInfo;

/// Maps `(method, path)` pairs onto FHIR REST interactions.
///
/// # Example
///
/// ```rust
/// use helios_interactions::{FhirVersion, InteractionClassifier, InteractionKind};
///
/// let classifier = InteractionClassifier::for_version(FhirVersion::R4)?;
///
/// let info = classifier.classify("GET", "/fhir/Patient/123/_history/2");
/// assert_eq!(info.interaction(), Some(InteractionKind::Vread));
/// assert_eq!(info.version_id(), Some("2"));
///
/// assert!(classifier.classify("GET", "/FakeResource/123").is_empty());
/// # Ok::<(), helios_interactions::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InteractionClassifier<O = StaticResourceTypes> {
    oracle: O,
}

impl InteractionClassifier<StaticResourceTypes> {
    /// Creates a classifier backed by the built-in resource types of `version`.
    pub fn for_version(version: FhirVersion) -> ConfigResult<Self> {
        Ok(Self::new(StaticResourceTypes::new(version)?))
    }
}

impl<O> InteractionClassifier<O>
where
    O: ResourceTypeOracle,
{
    /// Creates a classifier that validates resource types with `oracle`.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Returns the resource-type oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Classifies a request given its HTTP method and URL path.
    ///
    /// The method is compared case-sensitively (`GET`, `POST`, `PUT`,
    /// `PATCH`, `DELETE`). The path must not include the query string. Never
    /// fails: a request that matches nothing yields [`InteractionInfo::empty`].
    pub fn classify(&self, method: &str, path: &str) -> InteractionInfo {
        for matcher in &PATH_MATCHERS {
            if let Some(info) = (matcher.matches)(&self.oracle, method, path) {
                trace!(method, path, interaction = %matcher.kind, "Matched interaction");
                return info;
            }
        }

        trace!(method, path, "No interaction matched");
        InteractionInfo::empty()
    }

    /// Classifies an HTTP request, if there is one.
    ///
    /// Without a request the empty result is returned and no matcher runs.
    pub fn classify_request<B>(&self, request: Option<&Request<B>>) -> InteractionInfo {
        match request {
            Some(request) => self.classify(request.method().as_str(), request.uri().path()),
            None => InteractionInfo::empty(),
        }
    }
}
