// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the system.
//
// Rules for this layer:
//   - NO PDF parser types allowed here
//   - NO NLP toolkit types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Paginated documents and the text extracted from them
pub mod document;

// A generated fill-in-the-blank question
pub mod question;

// Core abstractions (traits) that other layers implement
pub mod traits;
