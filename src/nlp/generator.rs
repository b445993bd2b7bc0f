// ============================================================
// Layer 5 — Question Generator
// ============================================================
// Turns plain text into fill-in-the-blank questions:
//
//   Step 1: Split the text into sentences   (SentenceSegmenter)
//   Step 2: Keep sentences with more than
//           `min_sentence_tokens` words      (candidates)
//   Step 3: No candidates → sentinel
//   Step 4: Sample min(n, candidates) sentences without
//           replacement                      (data::sampler)
//   Step 5: Tag each sampled sentence, pick a random noun
//           longer than `min_keyword_chars`  (PosTagger)
//   Step 6: Blank its first whole-word occurrence
//           (blanker), or fall back to a "main idea" question
//
// The random source is a parameter: production passes
// rand::thread_rng(), tests pass a seeded StdRng.
//
// Reference: rand crate documentation (SliceRandom::choose)

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::sampler::sample_without_replacement;
use crate::domain::question::Question;
use crate::domain::traits::LanguageModel;
use crate::nlp::blanker::{blank_first, contains_word};

/// Questions generated when the caller does not say otherwise
pub const DEFAULT_NUM_QUESTIONS: usize = 5;

/// Thresholds used to pick sentences and keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// A sentence is a candidate only if it has MORE than this many
    /// whitespace-separated tokens
    pub min_sentence_tokens: usize,

    /// A noun is a keyword only if it has MORE than this many characters
    pub min_keyword_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_sentence_tokens: 6,
            min_keyword_chars:   2,
        }
    }
}

pub struct QuestionGenerator<'m> {
    model:  &'m dyn LanguageModel,
    config: GeneratorConfig,
}

impl<'m> QuestionGenerator<'m> {
    pub fn new(model: &'m dyn LanguageModel, config: GeneratorConfig) -> Self {
        Self { model, config }
    }

    /// Trimmed sentences long enough to ask about, in text order.
    pub fn candidate_sentences(&self, text: &str) -> Vec<String> {
        self.model
            .sentences(text)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| s.split_whitespace().count() > self.config.min_sentence_tokens)
            .collect()
    }

    /// Nouns in `sentence` that can be blanked. A noun that appears twice
    /// is listed twice.
    pub fn keywords(&self, sentence: &str) -> Vec<String> {
        self.model
            .tag(sentence)
            .into_iter()
            .filter(|t| t.pos.is_noun())
            .filter(|t| t.text.chars().count() > self.config.min_keyword_chars)
            .filter(|t| contains_word(sentence, &t.text))
            .map(|t| t.text)
            .collect()
    }

    /// Generate up to `num_questions` questions from `text`.
    ///
    /// Never fails: text without candidate sentences yields the single
    /// sentinel entry, and sentences without a usable noun yield a
    /// "main idea" question.
    pub fn generate<R>(&self, text: &str, num_questions: usize, rng: &mut R) -> Vec<Question>
    where
        R: Rng + ?Sized,
    {
        let candidates = self.candidate_sentences(text);

        if candidates.is_empty() {
            tracing::warn!("No candidate sentences in {} chars of text", text.len());
            return vec![Question::NoValidSentences];
        }

        let total   = candidates.len();
        let sampled = sample_without_replacement(candidates, num_questions, rng);

        tracing::info!(
            "Generating {} questions from {} candidate sentences",
            sampled.len(),
            total
        );

        sampled
            .into_iter()
            .map(|sentence| self.question_for(sentence, rng))
            .collect()
    }

    fn question_for<R>(&self, sentence: String, rng: &mut R) -> Question
    where
        R: Rng + ?Sized,
    {
        let keywords = self.keywords(&sentence);

        let blanked = keywords
            .choose(rng)
            .and_then(|k| blank_first(&sentence, k).map(|q| (q, k.clone())));

        match blanked {
            Some((question, answer)) => {
                tracing::debug!("Blanked '{}'", answer);
                Question::Blank { question, answer }
            }
            None => {
                tracing::debug!("No keyword in sentence, using main-idea question");
                Question::MainIdea { sentence }
            }
        }
    }
}
