// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// A document is an ordered sequence of pages. Each page yields
// zero or one text string — `None` means the page could not be
// read (typically a scanned, image-only page).
//
// ExtractedText is what the Text Extractor hands back: the
// concatenated, trimmed text of the visited pages. It may be
// empty, and callers are expected to check for that explicitly.
//
// Reference: Rust Book §5 (Structs and Methods)

/// The text of every visited page, joined with newlines and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Wrap already-joined text. Leading and trailing whitespace is removed
    /// so the invariant holds however the text was built.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self(text.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no page contributed any text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters (not bytes) in the text
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// The first `limit` characters, with a `...` suffix when the text is
    /// longer than that.
    ///
    /// Example:
    ///   ExtractedText::new("abcdef").preview(3) == "abc..."
    pub fn preview(&self, limit: usize) -> String {
        match self.0.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}...", &self.0[..cut]),
            None => self.0.clone(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_edges() {
        let text = ExtractedText::new("\n  page one\npage two \n");
        assert_eq!(text.as_str(), "page one\npage two");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(ExtractedText::new(" \n\t ").is_empty());
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        let text = ExtractedText::new("short");
        assert_eq!(text.preview(1000), "short");
    }

    #[test]
    fn test_preview_exact_length_has_no_suffix() {
        let text = ExtractedText::new("abcde");
        assert_eq!(text.preview(5), "abcde");
    }

    #[test]
    fn test_preview_truncates_with_suffix() {
        let text = ExtractedText::new("abcdefgh");
        assert_eq!(text.preview(3), "abc...");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        // Each 'é' is two bytes in UTF-8
        let text = ExtractedText::new("éééé");
        assert_eq!(text.preview(2), "éé...");
        assert_eq!(text.char_count(), 4);
    }
}
