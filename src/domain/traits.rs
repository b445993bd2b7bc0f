// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external collaborators of this system are expressed
// as traits so the rest of the code never names a concrete
// PDF parser or NLP toolkit:
//
//   PagedDocument     — an ordered set of pages that may or may
//                       not yield text (implemented by PdfDocument)
//   SentenceSegmenter — text → ordered sentence strings
//   PosTagger         — sentence → tokens with part-of-speech
//
// NlpruleModel implements both NLP traits; the test suite
// swaps in a small rule-based fake.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

// ─── PagedDocument ────────────────────────────────────────────────────────────
/// A paginated source of text.
///
/// Pages are addressed by zero-based index in document order.
pub trait PagedDocument {
    /// Total number of pages in the document
    fn page_count(&self) -> usize;

    /// Text of one page, or `None` when the page yields nothing
    /// (unreadable or image-only). Must not fail for a single page.
    fn page_text(&self, index: usize) -> Option<String>;
}

// ─── Part of speech ───────────────────────────────────────────────────────────
/// The coarse word classes the question generator cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    CommonNoun,
    ProperNoun,
    Other,
}

impl PartOfSpeech {
    pub fn is_noun(self) -> bool {
        matches!(self, PartOfSpeech::CommonNoun | PartOfSpeech::ProperNoun)
    }
}

/// One token of a tagged sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self { text: text.into(), pos }
    }
}

// ─── SentenceSegmenter ────────────────────────────────────────────────────────
/// Splits running text into sentences using standard sentence boundaries.
pub trait SentenceSegmenter {
    /// Sentences in text order. Whitespace around each sentence may be kept;
    /// callers trim.
    fn sentences(&self, text: &str) -> Vec<String>;
}

// ─── PosTagger ────────────────────────────────────────────────────────────────
/// Tokenizes a single sentence and tags each token's part of speech.
pub trait PosTagger {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken>;
}

/// Everything the question generator needs from a language model.
/// `Sync` so one process-wide instance can be shared read-only.
pub trait LanguageModel: SentenceSegmenter + PosTagger + Send + Sync {}

impl<T: SentenceSegmenter + PosTagger + Send + Sync> LanguageModel for T {}
