// ============================================================
// Layer 5 — Keyword Blanking
// ============================================================
// Replaces the FIRST whole-word occurrence of a keyword with
// the blank marker. Matching is case-sensitive and uses regex
// word boundaries, so "cat" inside "category" is left alone:
//
//   keyword  = "cat"
//   sentence = "The category of the cat was unclear."
//   result   = "The category of the _____ was unclear."
//
// Reference: regex crate documentation (\b, regex::escape)

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::domain::question::BLANK_MARKER;

fn whole_word(keyword: &str) -> Option<Regex> {
    if keyword.is_empty() {
        return None;
    }
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).ok()
}

/// True when `keyword` occurs in `sentence` as a whole word.
pub fn contains_word(sentence: &str, keyword: &str) -> bool {
    whole_word(keyword).is_some_and(|re| re.is_match(sentence))
}

/// The sentence with the first whole-word occurrence of `keyword` blanked,
/// or `None` when the keyword never occurs as a whole word.
pub fn blank_first(sentence: &str, keyword: &str) -> Option<String> {
    let re = whole_word(keyword)?;
    match re.replacen(sentence, 1, NoExpand(BLANK_MARKER)) {
        Cow::Owned(blanked) => Some(blanked),
        Cow::Borrowed(_) => None,
    }
}
