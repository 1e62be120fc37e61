use std::sync::Arc;

use crate::analysis::ResumeAnalyst;
use crate::config::Config;
use crate::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only; each request works on its own data.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable document text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable analysis backend. Default: the Groq-backed LlmClient.
    pub analyst: Arc<dyn ResumeAnalyst>,
    pub config: Config,
}
