use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lexicon::Lexicon;
use super::ordered;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("IO error reading pool: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed pool document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Pool version must be non-empty")]
    MissingVersion,
    #[error("Pool must contain at least one theme")]
    NoThemes,
    #[error("Slot {theme}/{slot} has {words} words but {clusters} clusters")]
    SlotLengthMismatch {
        theme: String,
        slot: String,
        words: usize,
        clusters: usize,
    },
    #[error("Word {word:?} in slot {theme}/{slot} has no lexicon entry")]
    MissingLexiconEntry {
        theme: String,
        slot: String,
        word: String,
    },
    #[error("Word {word:?} in slot {theme}/{slot} is in cluster {slot_cluster:?} but the lexicon says {lexicon_cluster:?}")]
    ClusterMismatch {
        theme: String,
        slot: String,
        word: String,
        slot_cluster: String,
        lexicon_cluster: String,
    },
}

/// A named category of words. `words[i]` belongs to cluster `clusters[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    pub words: Vec<String>,
    pub clusters: Vec<String>,
}

impl Slot {
    /// `(word, cluster)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .iter()
            .zip(self.clusters.iter())
            .map(|(w, c)| (w.as_str(), c.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(serialize_with = "ordered::serialize", deserialize_with = "ordered::deserialize")]
    pub slots: Vec<(String, Slot)>,
}

impl Theme {
    /// Every word of every slot, slot order first, then word order.
    /// A word listed under several slots appears once, at its first position.
    pub fn flatten(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut words = Vec::new();
        for (_, slot) in &self.slots {
            for word in &slot.words {
                if seen.insert(word.as_str()) {
                    words.push(word.clone());
                }
            }
        }
        words
    }
}

/// Versioned set of themes. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPool {
    pub version: String,
    #[serde(serialize_with = "ordered::serialize", deserialize_with = "ordered::deserialize")]
    pub themes: Vec<(String, Theme)>,
}

impl WordPool {
    pub fn from_json_str(raw: &str) -> Result<Self, PoolError> {
        let pool: WordPool = serde_json::from_str(raw)?;
        pool.validate()?;
        Ok(pool)
    }

    pub fn from_path(path: &Path) -> Result<Self, PoolError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), PoolError> {
        if self.version.is_empty() {
            return Err(PoolError::MissingVersion);
        }
        if self.themes.is_empty() {
            return Err(PoolError::NoThemes);
        }
        for (key, theme) in &self.themes {
            for (slot_name, slot) in &theme.slots {
                if slot.words.len() != slot.clusters.len() {
                    return Err(PoolError::SlotLengthMismatch {
                        theme: key.clone(),
                        slot: slot_name.clone(),
                        words: slot.words.len(),
                        clusters: slot.clusters.len(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    /// Theme at `index` in document order.
    pub fn theme_at(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index).map(|(_, theme)| theme)
    }

    /// Look a theme up by its display name (what seed records store).
    pub fn theme_by_name(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .map(|(_, theme)| theme)
            .find(|theme| theme.name == name)
    }

    /// Every pool word must map to the same cluster in the lexicon as in its
    /// slot. Selection resolves clusters from both sources in one run, so any
    /// disagreement would let a word be picked twice.
    pub fn check_lexicon(&self, lexicon: &Lexicon) -> Result<(), PoolError> {
        for (key, theme) in &self.themes {
            for (slot_name, slot) in &theme.slots {
                for (word, slot_cluster) in slot.entries() {
                    let lexicon_cluster = lexicon.cluster_of(word).ok_or_else(|| {
                        PoolError::MissingLexiconEntry {
                            theme: key.clone(),
                            slot: slot_name.clone(),
                            word: word.to_string(),
                        }
                    })?;
                    if lexicon_cluster != slot_cluster {
                        return Err(PoolError::ClusterMismatch {
                            theme: key.clone(),
                            slot: slot_name.clone(),
                            word: word.to_string(),
                            slot_cluster: slot_cluster.to_string(),
                            lexicon_cluster: lexicon_cluster.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
