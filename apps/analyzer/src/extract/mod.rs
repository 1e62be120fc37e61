//! Document text extraction.
//!
//! `pdf_extract` can panic on malformed input instead of returning an error,
//! so every call is wrapped in `catch_unwind`.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(
        "Could not extract any text from the PDF. \
         The file may be image-based or encrypted."
    )]
    NoText,

    #[error("PDF could not be read: {0}")]
    Malformed(String),
}

/// Turns raw document bytes into plain text.
///
/// Takes the buffer by value: it is dropped when extraction returns,
/// whether or not it succeeded. Carried in `AppState` as `Arc<dyn TextExtractor>`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, data: Bytes) -> Result<String, ExtractError>;
}

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, data: Bytes) -> Result<String, ExtractError> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&data)
        }));
        drop(data);

        match result {
            Ok(Ok(pages)) => {
                info!(pages = pages.len(), "Extracted PDF text");
                join_pages(pages)
            }
            Ok(Err(e)) => Err(ExtractError::Malformed(e.to_string())),
            Err(_) => Err(ExtractError::Malformed(
                "extraction panicked (malformed document)".into(),
            )),
        }
    }
}

/// Joins per-page text in page order, separated by a blank line.
/// Pages with no text are skipped.
pub fn join_pages<I>(pages: I) -> Result<String, ExtractError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let text = pages
        .into_iter()
        .filter_map(|page| {
            let trimmed = page.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}
