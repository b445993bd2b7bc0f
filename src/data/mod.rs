// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a PDF on disk and the plain text (and
// candidate sentences) the question generator works on.
//
//   PDF file
//       │
//       ▼
//   PdfDocument    → parses the file, exposes pages
//       │
//       ▼
//   TextExtractor  → joins the first N pages' text
//       │
//       ▼
//   ExtractedText  → handed to the NLP layer
//
// sample_without_replacement is used by the NLP layer to pick
// which candidate sentences become questions.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Opens PDFs with lopdf
pub mod loader;

/// Joins page text from a bounded page range
pub mod extractor;

/// Uniform sampling without replacement
pub mod sampler;
