// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `extract`, `generate` and
// `fetch-model`, and all their configurable flags.
//
// clap's derive macros generate help text, error messages for
// bad input, and type conversion. The question count is range
// checked here, so the application layer only ever sees valid
// values.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::extract_use_case::ExtractConfig;
use crate::application::quiz_use_case::QuizConfig;
use crate::infra::model_store::MODEL_URL;
use crate::nlp::generator::GeneratorConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract text from a PDF and print a preview
    Extract(ExtractArgs),

    /// Generate fill-in-the-blank questions from a PDF
    Generate(GenerateArgs),

    /// Download the language model if it is not already present
    FetchModel(ModelArgs),
}

/// All arguments for the `extract` command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the PDF file
    pub pdf: String,

    /// Maximum number of pages to scan, starting from the first
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: u32,
}

impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            pdf_path:  a.pdf,
            max_pages: a.max_pages as usize,
        }
    }
}

/// Where the language model lives
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Directory holding (or receiving) the language model
    #[arg(long, default_value = "models")]
    pub model_dir: String,

    /// Where to download the gzip-compressed model from when it is missing
    #[arg(long, default_value = MODEL_URL)]
    pub model_url: String,
}

/// All arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    /// How many questions to generate
    #[arg(long, short = 'n', default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=15))]
    pub num_questions: u8,

    /// Sentences need more than this many words to be used
    #[arg(long, default_value_t = 6)]
    pub min_sentence_tokens: usize,

    /// Keywords need more than this many characters
    #[arg(long, default_value_t = 2)]
    pub min_keyword_chars: usize,

    /// Print the questions as JSON instead of a numbered list
    #[arg(long)]
    pub json: bool,
}

/// The application layer never sees clap types
impl From<GenerateArgs> for QuizConfig {
    fn from(a: GenerateArgs) -> Self {
        QuizConfig {
            extract:       a.extract.into(),
            num_questions: a.num_questions as usize,
            model_dir:     a.model.model_dir,
            model_url:     a.model.model_url,
            generator:     GeneratorConfig {
                min_sentence_tokens: a.min_sentence_tokens,
                min_keyword_chars:   a.min_keyword_chars,
            },
        }
    }
}
