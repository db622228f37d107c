use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error reading lexicon: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed lexicon document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Lexicon version must be non-empty")]
    MissingVersion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub canonical: String,
    pub slot: String,
    pub cluster: String,
}

/// Word metadata used once words have been flattened out of their slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub version: String,
    pub mappings: BTreeMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn from_json_str(raw: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(raw)?;
        if lexicon.version.is_empty() {
            return Err(LexiconError::MissingVersion);
        }
        Ok(lexicon)
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.mappings.get(word)
    }

    pub fn cluster_of(&self, word: &str) -> Option<&str> {
        self.get(word).map(|entry| entry.cluster.as_str())
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
