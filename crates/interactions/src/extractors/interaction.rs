//! FHIR interaction extractor.
//!
//! Hands handlers the classification computed by
//! [`interaction_middleware`](crate::middleware::interaction::interaction_middleware).

use std::convert::Infallible;
use std::ops::Deref;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::interaction::InteractionInfo;

/// Axum extractor for the classified FHIR interaction.
///
/// Never rejects. When the classification middleware is not installed the
/// extractor yields the empty result; deciding how to answer an unrecognized
/// request (usually 404) is up to the handler.
///
/// # Example
///
/// ```rust,ignore
/// use helios_interactions::extractors::Interaction;
///
/// async fn handler(interaction: Interaction) {
///     if let Some(kind) = interaction.interaction() {
///         println!("{} on {:?}", kind, interaction.resource_type());
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction(pub InteractionInfo);

impl Interaction {
    /// Consumes the extractor and returns the classification.
    pub fn into_inner(self) -> InteractionInfo {
        self.0
    }
}

impl Deref for Interaction {
    type Target = InteractionInfo;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Interaction
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let info = parts
            .extensions
            .get::<InteractionInfo>()
            .cloned()
            .unwrap_or_default();

        Ok(Interaction(info))
    }
}
