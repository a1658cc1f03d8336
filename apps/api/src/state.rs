use std::sync::Arc;

use crate::classifier::Classifier;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing mutable: each request is independent.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable classification backend. Default: `HttpClassifier`.
    pub classifier: Arc<dyn Classifier>,
}
