// ============================================================
// Layer 2 — QuizUseCase
// ============================================================
// Generates study questions from already-extracted text using
// the process-wide language model.
//
// The use case borrows the model rather than owning it: the
// model is built once at startup (nlp::model::init) and every
// request only reads it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::application::extract_use_case::ExtractConfig;
use crate::domain::document::ExtractedText;
use crate::domain::question::Question;
use crate::domain::traits::LanguageModel;
use crate::infra::model_store::{DEFAULT_MODEL_DIR, MODEL_URL};
use crate::nlp::generator::{GeneratorConfig, QuestionGenerator, DEFAULT_NUM_QUESTIONS};

// ─── Quiz Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    pub extract:       ExtractConfig,
    pub num_questions: usize,
    pub model_dir:     String,
    pub model_url:     String,
    pub generator:     GeneratorConfig,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            extract:       ExtractConfig::default(),
            num_questions: DEFAULT_NUM_QUESTIONS,
            model_dir:     DEFAULT_MODEL_DIR.to_string(),
            model_url:     MODEL_URL.to_string(),
            generator:     GeneratorConfig::default(),
        }
    }
}

pub struct QuizUseCase<'m> {
    generator:     QuestionGenerator<'m>,
    num_questions: usize,
}

impl<'m> QuizUseCase<'m> {
    pub fn new(model: &'m dyn LanguageModel, config: &QuizConfig) -> Self {
        Self {
            generator:     QuestionGenerator::new(model, config.generator),
            num_questions: config.num_questions,
        }
    }

    /// Generate questions with the thread-local random source.
    pub fn generate(&self, text: &ExtractedText) -> Vec<Question> {
        self.generate_with(text, &mut rand::thread_rng())
    }

    /// Generate questions with a caller-supplied random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, text: &ExtractedText, rng: &mut R) -> Vec<Question> {
        self.generator.generate(text.as_str(), self.num_questions, rng)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::fake::FakeModel;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_asks_five_questions() {
        let config = QuizConfig::default();
        assert_eq!(config.num_questions, 5);
        assert_eq!(config.model_dir, "models");
    }

    #[test]
    fn test_empty_text_gives_sentinel() {
        let model    = FakeModel::with_nouns(&["river"], &[]);
        let use_case = QuizUseCase::new(&model, &QuizConfig::default());

        let out = use_case.generate(&ExtractedText::default());

        assert_eq!(out, vec![Question::NoValidSentences]);
    }

    #[test]
    fn test_respects_requested_count() {
        let model  = FakeModel::with_nouns(&["page"], &[]);
        let text   = ExtractedText::new(
            (1..=10)
                .map(|i| format!("This is sentence number {i} on the page here."))
                .collect::<Vec<_>>()
                .join(" "),
        );
        let config = QuizConfig { num_questions: 3, ..QuizConfig::default() };

        let out = QuizUseCase::new(&model, &config)
            .generate_with(&text, &mut StdRng::seed_from_u64(4));

        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|q| q.answer() == Some("page")));
    }
}
