//! HTTP test harness.
//!
//! Provides an axum application that echoes the classification of every
//! request, wrapped with the interaction middleware.

use axum::{Json, Router, routing::any};
use axum_test::TestServer;
use helios_interactions::extractors::Interaction;
use helios_interactions::{
    ClassifierConfig, InteractionClassifier, InteractionInfo, ResourceTypeOracle,
    with_interaction_classification,
};

/// Handler returning the classification the middleware stored.
async fn echo_interaction(Interaction(info): Interaction) -> Json<InteractionInfo> {
    Json(info)
}

/// Router answering every path and method with the echo handler.
pub fn echo_router() -> Router {
    Router::new()
        .route("/", any(echo_interaction))
        .route("/{*path}", any(echo_interaction))
}

/// Test harness for HTTP-level classification testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = ClassificationHarness::new();
/// let response = harness.server.get("/Patient/123").await;
/// response.assert_status_ok();
/// ```
pub struct ClassificationHarness {
    /// The test server instance.
    pub server: TestServer,
}

impl ClassificationHarness {
    /// Creates a harness using the test configuration's classifier.
    pub fn new() -> Self {
        let classifier = ClassifierConfig::for_testing()
            .build_classifier()
            .expect("Failed to build classifier");
        Self::with_classifier(classifier)
    }

    /// Creates a harness around a specific classifier.
    pub fn with_classifier<O>(classifier: InteractionClassifier<O>) -> Self
    where
        O: ResourceTypeOracle + 'static,
    {
        let app = with_interaction_classification(echo_router(), classifier);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server }
    }

    /// Creates a harness without the classification middleware.
    pub fn without_middleware() -> Self {
        let server = TestServer::new(echo_router()).expect("Failed to create test server");
        Self { server }
    }
}
