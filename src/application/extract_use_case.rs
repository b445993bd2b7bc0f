// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Opens a PDF and extracts the text of its first pages:
//
//   Step 1: Parse the file            (Layer 4 - data::loader)
//   Step 2: Join the page text        (Layer 4 - data::extractor)
//
// A file that cannot be opened is an error. A file that opens
// but yields no text is NOT an error; the caller checks
// ExtractedText::is_empty() and warns the user.

use serde::{Deserialize, Serialize};

use crate::data::extractor::{TextExtractor, DEFAULT_MAX_PAGES};
use crate::data::loader::{DocumentError, PdfDocument};
use crate::domain::document::ExtractedText;

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub pdf_path:  String,
    pub max_pages: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pdf_path:  String::new(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Open the configured PDF and extract its text.
    pub fn execute(&self) -> Result<ExtractedText, DocumentError> {
        tracing::info!(
            "Extracting up to {} pages from '{}'",
            self.config.max_pages,
            self.config.pdf_path
        );

        let document = PdfDocument::open(&self.config.pdf_path)?;
        let text     = TextExtractor::new(self.config.max_pages).extract(&document);

        if text.is_empty() {
            tracing::warn!("'{}' yielded no extractable text", document.source_name());
        }

        Ok(text)
    }
}
