// ============================================================
// Layer 6 — Language Model Store
// ============================================================
// Locates the English NLP model on disk, fetching it once when
// it is missing or cannot be loaded.
//
// The model is nlprule's English tokenizer binary. It is
// published gzip-compressed with each nlprule release, so a
// fetch downloads the .gz, inflates it with flate2, and writes
// the result next to where the loader expects it:
//
//   models/
//     en_tokenizer.bin   ← loaded by NlpruleModel
//
// Exactly one fetch is attempted per load. If the fetch or the
// reload after it fails, the error is returned and the caller
// must not go on to serve requests.
//
// Reference: flate2 and reqwest crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fmt::Display,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use thiserror::Error;

/// Fixed file name of the language model
pub const MODEL_NAME: &str = "en_tokenizer.bin";

/// Where the model is fetched from when it is not present locally
pub const MODEL_URL: &str =
    "https://github.com/bminixhofer/nlprule/releases/download/0.6.4/en_tokenizer.bin.gz";

/// Default directory holding the model
pub const DEFAULT_MODEL_DIR: &str = "models";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot load language model from '{path}': {reason}")]
    Load { path: String, reason: String },

    #[error("cannot download language model from '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("downloaded language model is not valid gzip: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("cannot write language model to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct ModelStore {
    dir: PathBuf,
    url: String,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), url: MODEL_URL.to_string() }
    }

    /// Fetch from a different location (mirrors, tests)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_NAME)
    }

    pub fn is_present(&self) -> bool {
        self.model_path().is_file()
    }

    /// Load the model with `load`, fetching it first when it is missing.
    /// A model file that exists but fails to load is fetched again once.
    pub fn load_or_fetch<T, E, F>(&self, load: F) -> Result<T, ModelError>
    where
        E: Display,
        F: Fn(&Path) -> Result<T, E>,
    {
        let path = self.model_path();

        if path.is_file() {
            match load(&path) {
                Ok(model) => {
                    tracing::info!("Loaded language model from '{}'", path.display());
                    return Ok(model);
                }
                Err(e) => tracing::warn!(
                    "Language model at '{}' failed to load ({}), fetching a fresh copy",
                    path.display(),
                    e
                ),
            }
        } else {
            tracing::info!("Language model not found at '{}'", path.display());
        }

        self.fetch()?;

        load(&path).map_err(|e| ModelError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Download, inflate, and store the model.
    pub fn fetch(&self) -> Result<(), ModelError> {
        tracing::info!("Fetching language model from {}", self.url);

        let fetch_err = |source| ModelError::Fetch { url: self.url.clone(), source };

        let compressed = reqwest::blocking::get(&self.url)
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(fetch_err)?;

        let mut model = Vec::new();
        GzDecoder::new(compressed.as_ref())
            .read_to_end(&mut model)
            .map_err(ModelError::Decompress)?;

        self.write(&model)?;

        tracing::info!(
            "Stored language model ({} bytes) at '{}'",
            model.len(),
            self.model_path().display()
        );
        Ok(())
    }

    /// Write through a temporary file so a half-written model is never
    /// picked up by the next load.
    fn write(&self, model: &[u8]) -> Result<(), ModelError> {
        let path = self.model_path();
        let write_err = |source| ModelError::Write { path: path.display().to_string(), source };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let partial = path.with_extension("bin.part");
        fs::write(&partial, model).map_err(write_err)?;
        fs::rename(&partial, &path).map_err(write_err)?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // Nothing listens on port 9 (discard) in the test environment,
    // so any fetch fails fast with a connection error
    const UNREACHABLE: &str = "http://127.0.0.1:9/en_tokenizer.bin.gz";

    #[test]
    fn test_model_path_uses_fixed_name() {
        let store = ModelStore::new("some/dir");
        assert_eq!(store.model_path(), PathBuf::from("some/dir/en_tokenizer.bin"));
    }

    #[test]
    fn test_present_model_is_loaded_without_fetch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MODEL_NAME), b"model bytes").unwrap();
        let store = ModelStore::new(dir.path()).with_url(UNREACHABLE);

        let loaded = store
            .load_or_fetch(|p| fs::read(p).map_err(|e| e.to_string()))
            .unwrap();

        assert_eq!(loaded, b"model bytes");
    }

    #[test]
    fn test_missing_model_with_failed_fetch_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).with_url(UNREACHABLE);
        let calls = Cell::new(0);

        let result = store.load_or_fetch(|_| {
            calls.set(calls.get() + 1);
            Ok::<(), String>(())
        });

        assert!(matches!(result, Err(ModelError::Fetch { .. })));
        // The loader never runs when there is nothing to load
        assert_eq!(calls.get(), 0);
        assert!(!store.is_present());
    }

    #[test]
    fn test_broken_model_triggers_single_fetch_attempt() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MODEL_NAME), b"corrupt").unwrap();
        let store = ModelStore::new(dir.path()).with_url(UNREACHABLE);
        let calls = Cell::new(0);

        let result = store.load_or_fetch(|_| {
            calls.set(calls.get() + 1);
            Err::<(), _>("bad magic")
        });

        assert!(matches!(result, Err(ModelError::Fetch { .. })));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_write_replaces_model_atomically() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nested"));

        store.write(b"fresh").unwrap();

        assert_eq!(fs::read(store.model_path()).unwrap(), b"fresh");
        assert!(!store.model_path().with_extension("bin.part").exists());
    }
}
