// ============================================================
// Layer 4 — Text Extractor
// ============================================================
// Walks the first `max_pages` pages of a document in order and
// joins the text of every page that yields any.
//
//   page 1  → "Intro..."      ✓ kept
//   page 2  → None            ✗ skipped (scanned page)
//   page 3  → ""              ✗ skipped
//   page 4  → "Chapter 1..."  ✓ kept
//   ...
//   page 11 → never visited when max_pages = 10
//
// The joined text is trimmed. An empty result is a valid
// outcome, not an error.
//
// Reference: Rust Book §13 (Iterators)

use crate::domain::document::ExtractedText;
use crate::domain::traits::PagedDocument;

/// Pages scanned when the caller does not say otherwise
pub const DEFAULT_MAX_PAGES: usize = 10;

pub struct TextExtractor {
    max_pages: usize,
}

impl TextExtractor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Concatenate the text of the first `max_pages` pages.
    pub fn extract(&self, document: &dyn PagedDocument) -> ExtractedText {
        let visit = document.page_count().min(self.max_pages);

        let texts: Vec<String> = (0..visit)
            .filter_map(|index| {
                let text = document.page_text(index).filter(|t| !t.is_empty());
                if text.is_none() {
                    tracing::debug!("Page {} yielded no text", index + 1);
                }
                text
            })
            .collect();

        tracing::info!(
            "Extracted text from {} of {} visited pages ({} total)",
            texts.len(),
            visit,
            document.page_count()
        );

        ExtractedText::new(texts.join("\n"))
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGES)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory document that records which pages were asked for
    struct FakeDocument {
        pages:   Vec<Option<String>>,
        visited: RefCell<Vec<usize>>,
    }

    impl FakeDocument {
        fn new(pages: Vec<Option<&str>>) -> Self {
            Self {
                pages:   pages.into_iter().map(|p| p.map(str::to_string)).collect(),
                visited: RefCell::new(Vec::new()),
            }
        }
    }

    impl PagedDocument for FakeDocument {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> Option<String> {
            self.visited.borrow_mut().push(index);
            self.pages.get(index).cloned().flatten()
        }
    }

    #[test]
    fn test_twelve_pages_visits_first_ten_only() {
        let pages = (1..=12).map(|_| Some("text")).collect();
        let doc   = FakeDocument::new(pages);

        TextExtractor::new(10).extract(&doc);

        assert_eq!(*doc.visited.borrow(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_fewer_pages_than_limit_visits_all() {
        let doc = FakeDocument::new(vec![Some("a"), Some("b"), Some("c")]);
        TextExtractor::new(10).extract(&doc);
        assert_eq!(doc.visited.borrow().len(), 3);
    }

    #[test]
    fn test_skips_empty_and_unreadable_pages() {
        let doc  = FakeDocument::new(vec![Some("first"), None, Some(""), Some("fourth")]);
        let text = TextExtractor::default().extract(&doc);
        assert_eq!(text.as_str(), "first\nfourth");
    }

    #[test]
    fn test_output_is_trimmed() {
        let doc  = FakeDocument::new(vec![Some("\n  leading"), Some("trailing  \n\n")]);
        let text = TextExtractor::default().extract(&doc);
        assert_eq!(text.as_str(), "leading\ntrailing");
    }

    #[test]
    fn test_no_readable_pages_gives_empty_text() {
        let doc  = FakeDocument::new(vec![None, None]);
        let text = TextExtractor::default().extract(&doc);
        assert!(text.is_empty());
    }

    #[test]
    fn test_content_past_limit_never_appears() {
        let mut pages: Vec<Option<&str>> = vec![None; 10];
        pages.push(Some("eleventh page"));
        let doc = FakeDocument::new(pages);

        let text = TextExtractor::new(10).extract(&doc);

        assert!(text.is_empty());
    }
}
