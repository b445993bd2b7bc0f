// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// A generated study question, derived from exactly one sentence.
//
// Three shapes exist:
//   Blank            — the sentence with one keyword replaced by
//                      the blank marker; the keyword is the answer
//   MainIdea         — no usable keyword was found, so a generic
//                      question is asked and the whole sentence
//                      is the answer
//   NoValidSentences — sentinel returned when the text held no
//                      sentence long enough to ask about
//
// Example:
//   Question: "Q: The _____ flows past the old mill every spring."
//   Answer:   "A: river"
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

use serde::Serialize;

/// Placeholder substituted for the masked keyword
pub const BLANK_MARKER: &str = "_____";

/// Question asked when a sentence has no usable keyword
pub const MAIN_IDEA_PROMPT: &str = "What is the main idea of this?";

/// Message returned when the text has no candidate sentences
pub const NO_VALID_SENTENCES: &str = "No valid sentences found for question generation.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    Blank {
        /// The source sentence with the keyword replaced by BLANK_MARKER
        question: String,
        /// The masked keyword
        answer: String,
    },
    MainIdea {
        sentence: String,
    },
    NoValidSentences,
}

impl Question {
    /// The question line, without the "Q: " prefix
    pub fn prompt(&self) -> &str {
        match self {
            Question::Blank { question, .. } => question,
            Question::MainIdea { .. } => MAIN_IDEA_PROMPT,
            Question::NoValidSentences => NO_VALID_SENTENCES,
        }
    }

    /// The answer line, without the "A: " prefix.
    /// The sentinel has no answer.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Question::Blank { answer, .. } => Some(answer),
            Question::MainIdea { sentence } => Some(sentence),
            Question::NoValidSentences => None,
        }
    }
}

/// Renders the two-line "Q: …" / "A: …" form.
/// The sentinel renders as its bare message.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.answer() {
            Some(answer) => write!(f, "Q: {}\nA: {}", self.prompt(), answer),
            None => f.write_str(self.prompt()),
        }
    }
}
