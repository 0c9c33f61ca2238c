//! Interaction classification middleware.
//!
//! Classifies every request before it reaches a handler and stores the
//! resulting [`InteractionInfo`](crate::InteractionInfo) as a request
//! extension, where the [`Interaction`](crate::extractors::Interaction)
//! extractor picks it up.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    middleware::{Next, from_fn_with_state},
    response::Response,
};
use tracing::debug;

use crate::fhir_types::ResourceTypeOracle;
use crate::routing::InteractionClassifier;

/// Middleware function for interaction classification.
///
/// This can be used with `axum::middleware::from_fn_with_state`, with the
/// shared classifier as state.
pub async fn interaction_middleware<O>(
    State(classifier): State<Arc<InteractionClassifier<O>>>,
    mut request: Request,
    next: Next,
) -> Response
where
    O: ResourceTypeOracle + 'static,
{
    let info = classifier.classify_request(Some(&request));
    debug!(
        method = %request.method(),
        path = %request.uri().path(),
        interaction = ?info.interaction(),
        resource_type = ?info.resource_type(),
        "Classified FHIR interaction"
    );

    request.extensions_mut().insert(info);
    next.run(request).await
}

/// Wraps every route of `router` with [`interaction_middleware`].
///
/// # Example
///
/// ```rust
/// use axum::{Router, routing::any};
/// use helios_interactions::{FhirVersion, InteractionClassifier, with_interaction_classification};
/// use helios_interactions::extractors::Interaction;
///
/// async fn handler(Interaction(info): Interaction) -> String {
///     format!("{:?}", info.interaction())
/// }
///
/// let classifier = InteractionClassifier::for_version(FhirVersion::R4)?;
/// let app: Router = with_interaction_classification(
///     Router::new().route("/{*path}", any(handler)),
///     classifier,
/// );
/// # Ok::<(), helios_interactions::ConfigError>(())
/// ```
pub fn with_interaction_classification<S, O>(
    router: Router<S>,
    classifier: InteractionClassifier<O>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    O: ResourceTypeOracle + 'static,
{
    router.layer(from_fn_with_state(
        Arc::new(classifier),
        interaction_middleware::<O>,
    ))
}
