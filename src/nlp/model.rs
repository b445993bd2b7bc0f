// ============================================================
// Layer 5 — nlprule Language Model
// ============================================================
// The only file that imports nlprule. Wraps nlprule's English
// Tokenizer, which segments text into sentences and tags every
// token with Penn Treebank part-of-speech tags:
//
//   NN / NNS    → common noun
//   NNP / NNPS  → proper noun
//
// The tokenizer binary is large and slow to deserialize, so one
// instance is built per process and kept in a OnceLock. After
// initialisation it is only ever read.

use std::path::Path;
use std::sync::OnceLock;

use nlprule::Tokenizer;

use crate::domain::traits::{PartOfSpeech, PosTagger, SentenceSegmenter, TaggedToken};
use crate::infra::model_store::{ModelError, ModelStore};

/// Process-wide model, set once by `init`
static MODEL: OnceLock<NlpruleModel> = OnceLock::new();

pub struct NlpruleModel {
    tokenizer: Tokenizer,
}

impl NlpruleModel {
    /// Deserialize a tokenizer binary from disk.
    pub fn load(path: &Path) -> Result<Self, nlprule::Error> {
        let tokenizer = Tokenizer::new(path)?;
        Ok(Self { tokenizer })
    }
}

/// Load the process-wide model, fetching it through `store` when absent.
/// Later calls return the instance built by the first successful call.
pub fn init(store: &ModelStore) -> Result<&'static NlpruleModel, ModelError> {
    if let Some(model) = MODEL.get() {
        return Ok(model);
    }

    let model = store.load_or_fetch(NlpruleModel::load)?;
    Ok(MODEL.get_or_init(|| model))
}

fn classify(pos: &str) -> PartOfSpeech {
    match pos {
        "NN" | "NNS" => PartOfSpeech::CommonNoun,
        "NNP" | "NNPS" => PartOfSpeech::ProperNoun,
        _ => PartOfSpeech::Other,
    }
}

impl SentenceSegmenter for NlpruleModel {
    fn sentences(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .pipe(text)
            .map(|sentence| sentence.text().to_string())
            .collect()
    }
}

impl PosTagger for NlpruleModel {
    fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        self.tokenizer
            .pipe(sentence)
            .flat_map(|s| {
                s.tokens()
                    .iter()
                    .map(|token| {
                        let word = token.word();
                        // A token keeps every reading that survived
                        // disambiguation; any noun reading counts
                        let pos = word
                            .tags()
                            .iter()
                            .map(|data| classify(data.pos().as_str()))
                            .find(|pos| pos.is_noun())
                            .unwrap_or(PartOfSpeech::Other);
                        TaggedToken::new(word.text().as_str(), pos)
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|token| !token.text.trim().is_empty())
            .collect()
    }
}
