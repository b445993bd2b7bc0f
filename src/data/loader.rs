// ============================================================
// Layer 4 — PDF Document Loader
// ============================================================
// Opens a PDF with the lopdf crate and exposes it as a
// PagedDocument so the Text Extractor never sees lopdf types.
//
// How lopdf addresses pages:
//   Document::get_pages() returns a BTreeMap of
//   1-based page number → object id, already in page order.
//   Document::extract_text(&[n]) decodes the text-showing
//   operators of page n's content stream.
//
// Failure modes are split in two:
//   - the file cannot be read or parsed at all → DocumentError,
//     fatal for the whole extraction
//   - one page fails to decode → that page yields None and the
//     extractor simply moves on
//
// Reference: lopdf crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs, path::Path};

use lopdf::Document;
use thiserror::Error;

use crate::domain::traits::PagedDocument;

/// Errors that make a whole document unusable.
/// Distinct from "a page produced no text", which is not an error.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{source_name}' is empty")]
    Empty { source_name: String },

    #[error("'{source_name}' is not a readable PDF: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: lopdf::Error,
    },
}

/// A parsed PDF, ready for page-by-page text extraction.
pub struct PdfDocument {
    /// Filename or label, kept for log messages
    source_name: String,
    inner: Document,
    /// lopdf page numbers (1-based) in document order
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Read and parse a PDF from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Self::from_bytes(source_name, &bytes)
    }

    /// Parse a PDF already held in memory (e.g. an uploaded file).
    pub fn from_bytes(source_name: impl Into<String>, bytes: &[u8]) -> Result<Self, DocumentError> {
        let source_name = source_name.into();

        if bytes.is_empty() {
            return Err(DocumentError::Empty { source_name });
        }

        let inner = Document::load_mem(bytes).map_err(|source| DocumentError::Parse {
            source_name: source_name.clone(),
            source,
        })?;

        // BTreeMap keys come out sorted, i.e. in page order
        let page_numbers: Vec<u32> = inner.get_pages().keys().copied().collect();

        tracing::debug!("Opened '{}' ({} pages)", source_name, page_numbers.len());

        Ok(Self { source_name, inner, page_numbers })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

impl PagedDocument for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Option<String> {
        let page_number = *self.page_numbers.get(index)?;

        match self.inner.extract_text(&[page_number]) {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(
                    "No text from page {} of '{}': {}",
                    page_number,
                    self.source_name,
                    e
                );
                None
            }
        }
    }
}
