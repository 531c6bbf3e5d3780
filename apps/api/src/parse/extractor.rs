//! Text extraction from uploaded documents.
//!
//! Uploads are held in memory and handed to the PDF library as a byte slice;
//! nothing is written to disk, and concurrent requests share no state.
//!
//! Default: `PdfTextExtractor` (backed by `pdf_extract`).

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The text extraction trait. Implement this to swap backends without
/// touching the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<String, ExtractError>;
}

/// PDF extractor backed by `pdf_extract`. Parsing is CPU-bound and
/// synchronous, so it runs on the blocking thread pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, ExtractError> {
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await??;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_rejected() {
        let extractor = PdfTextExtractor;
        let result = extractor
            .extract(Bytes::from_static(b"this is not a pdf"))
            .await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        let extractor = PdfTextExtractor;
        let result = extractor.extract(Bytes::new()).await;
        assert!(result.is_err());
    }
}
