// Rule-based stand-in for the real language model, used by tests.
//
// Sentences end at '.', '!' or '?' followed by whitespace or the
// end of the text. Tokens are whitespace-separated words with
// edge punctuation stripped; only words listed as nouns are tagged
// as nouns.

use crate::domain::traits::{PartOfSpeech, PosTagger, SentenceSegmenter, TaggedToken};

pub struct FakeModel {
    common: Vec<&'static str>,
    proper: Vec<&'static str>,
}

impl FakeModel {
    pub fn with_nouns(common: &[&'static str], proper: &[&'static str]) -> Self {
        Self { common: common.to_vec(), proper: proper.to_vec() }
    }
}

impl SentenceSegmenter for FakeModel {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut out   = Vec::new();
        let mut start = 0;

        for (i, c) in text.char_indices() {
            if matches!(c, '.' | '!' | '?') {
                let end = i + c.len_utf8();
                if text[end..].chars().next().map_or(true, char::is_whitespace) {
                    out.push(text[start..end].to_string());
                    start = end;
                }
            }
        }
        if !text[start..].trim().is_empty() {
            out.push(text[start..].to_string());
        }
        out
    }
}

impl PosTagger for FakeModel {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        sentence
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .map(|w| {
                let pos = if self.common.iter().any(|n| *n == w) {
                    PartOfSpeech::CommonNoun
                } else if self.proper.iter().any(|n| *n == w) {
                    PartOfSpeech::ProperNoun
                } else {
                    PartOfSpeech::Other
                };
                TaggedToken::new(w, pos)
            })
            .collect()
    }
}
