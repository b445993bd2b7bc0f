// ============================================================
// Layer 5 — NLP / Question Layer
// ============================================================
// Everything that needs to understand sentences lives here.
//
//   model.rs     — nlprule-backed language model
//                  Sentence segmentation and part-of-speech
//                  tagging behind the domain traits, plus the
//                  process-wide instance. The only file that
//                  imports nlprule.
//
//   blanker.rs   — Whole-word keyword masking
//
//   generator.rs — The question generator
//                  Candidate filtering, sampling, keyword
//                  choice, blanking, and fallbacks
//
// Reference: Rust Book §7 (Modules)

pub mod blanker;
pub mod generator;
pub mod model;

#[cfg(test)]
pub(crate) mod fake;
