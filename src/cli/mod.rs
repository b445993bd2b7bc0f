// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates the work to Layer 2 (application).
//
// Three commands are supported:
//   1. `extract`     — print a preview of a PDF's text
//   2. `generate`    — preview the text, then print questions
//   3. `fetch-model` — make sure the language model is on disk
//
// `generate` loads the language model BEFORE touching the PDF:
// if the model cannot be found or fetched, nothing is served.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, ExtractArgs, GenerateArgs, ModelArgs};

use crate::application::extract_use_case::{ExtractConfig, ExtractUseCase};
use crate::application::quiz_use_case::{QuizConfig, QuizUseCase};
use crate::domain::document::ExtractedText;
use crate::domain::question::Question;
use crate::infra::model_store::ModelStore;
use crate::nlp::model;

/// Characters of extracted text shown before the questions
const PREVIEW_CHARS: usize = 1000;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-quiz",
    version,
    about = "Extract text from a PDF and generate fill-in-the-blank study questions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args)    => run_extract(args),
            Commands::Generate(args)   => run_generate(args),
            Commands::FetchModel(args) => run_fetch_model(args),
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let config: ExtractConfig = args.into();
    if let Some(text) = extract_and_preview(&config)? {
        println!("\n{} characters extracted.", text.char_count());
    }
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let json = args.json;
    let config: QuizConfig = args.into();

    // Startup: the model must be available before any request is served
    let store = ModelStore::new(&config.model_dir).with_url(&config.model_url);
    let model = model::init(&store).context("Language model is unavailable")?;

    let Some(text) = extract_and_preview(&config.extract)? else {
        return Ok(());
    };

    tracing::info!("Generating {} questions", config.num_questions);
    let questions = QuizUseCase::new(model, &config).generate(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        println!("\nQuestions generated:\n");
        println!("{}", render_questions(&questions));
    }
    Ok(())
}

fn run_fetch_model(args: ModelArgs) -> Result<()> {
    let store = ModelStore::new(&args.model_dir).with_url(&args.model_url);

    if store.is_present() {
        println!("Language model already present at {}", store.model_path().display());
        return Ok(());
    }

    store.fetch().context("Could not fetch the language model")?;
    println!("Language model saved to {}", store.model_path().display());
    Ok(())
}

/// Extract the configured PDF and print the preview.
///
/// Returns `Ok(None)` after printing a warning when the PDF holds no
/// extractable text. A PDF that cannot be opened is an error with its
/// own message.
fn extract_and_preview(config: &ExtractConfig) -> Result<Option<ExtractedText>> {
    let text = ExtractUseCase::new(config.clone())
        .execute()
        .context("Could not open the PDF")?;

    if text.is_empty() {
        eprintln!("Warning: could not extract text from the PDF (maybe it's scanned or empty).");
        return Ok(None);
    }

    println!("Text successfully extracted.\n");
    println!("Extracted text preview:\n{}", text.preview(PREVIEW_CHARS));
    Ok(Some(text))
}

/// Numbered list, one entry per question:
///
/// ```text
/// 1. Q: The _____ flows past the mill.
/// A: river
/// ```
pub fn render_questions(questions: &[Question]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_each_question() {
        let questions = vec![
            Question::Blank { question: "The _____ is wide.".into(), answer: "river".into() },
            Question::MainIdea { sentence: "Nothing much happened there today.".into() },
        ];

        assert_eq!(
            render_questions(&questions),
            "1. Q: The _____ is wide.\nA: river\n\n\
             2. Q: What is the main idea of this?\nA: Nothing much happened there today."
        );
    }

    #[test]
    fn test_render_sentinel() {
        assert_eq!(
            render_questions(&[Question::NoValidSentences]),
            "1. No valid sentences found for question generation."
        );
    }
}
