use std::sync::Arc;

use crate::chat::pipeline::PromptPipeline;
use crate::summarize::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PromptPipeline>,
    /// Pluggable extractor. Default: `PdfExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
}
