// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user-facing goal (extracting text, generating questions).
//
// Rules for this layer:
//   - No PDF parsing or NLP code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Open a PDF and extract its text
pub mod extract_use_case;

// Turn extracted text into study questions
pub mod quiz_use_case;
