//! PDF text extraction.
//!
//! Extraction returns `Result<String, ExtractError>`; callers branch on the
//! variant. Parsing runs on the blocking pool because `pdf-extract` is
//! synchronous and can be slow on large documents.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The library could not read the document.
    #[error("Error extracting text from PDF: {0}")]
    Malformed(String),

    /// The extraction task panicked or was cancelled.
    #[error("PDF extraction task failed: {0}")]
    Crashed(String),

    /// The document parsed but contains no text.
    #[error("No extractable text found in the PDF")]
    NoText,
}

/// Turns an uploaded document into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractError>;
}

/// `pdf-extract` backed extractor.
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractError> {
        let size = bytes.len();
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| ExtractError::Crashed(e.to_string()))?
        .map_err(|e| ExtractError::Malformed(e.to_string()))?;

        let text = join_pages(&pages);
        debug!(
            "Extracted {} chars from {} pages ({size} byte PDF)",
            text.len(),
            pages.len()
        );

        if text.is_empty() {
            return Err(ExtractError::NoText);
        }
        Ok(text)
    }
}

/// Trims each page, joins pages with a newline, and trims the result.
/// `pdf-extract` opens every page with blank lines, so pages are trimmed on
/// both ends.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref().trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
