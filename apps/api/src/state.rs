use std::sync::Arc;

use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn ModelClient>,
}
