// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any specific
// business layer:
//
//   model_store.rs — Language model persistence
//                    Finds the NLP model on disk, or downloads
//                    and unpacks it once if it is missing, so
//                    the NLP layer only ever loads from a path.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Language model locating, fetching, and loading
pub mod model_store;
