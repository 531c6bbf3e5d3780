use std::sync::Arc;

use crate::config::Config;
use crate::parse::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: `PdfTextExtractor`; tests swap in stubs.
    pub extractor: Arc<dyn TextExtractor>,
}
