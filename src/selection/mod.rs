//! Constrained word selection.
//!
//! Three phases run in order against one [`UsedClusters`]:
//! slot coverage, diversity fill, then wildcards. Within a run no two words
//! share a cluster, except when slot coverage finds a slot whose clusters are
//! all taken and falls back to an unconstrained pick.

pub mod coverage;
pub mod fill;

use std::collections::BTreeSet;

pub use coverage::select_slot_coverage;
pub use fill::{select_diverse_fill, select_wildcards};

/// The cluster a word counts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterRef<'a> {
    /// A cluster tag from the pool or lexicon.
    Tag(&'a str),
    /// A word missing from the lexicon; it forms a cluster of its own.
    Unlisted(&'a str),
}

/// Clusters consumed so far in one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedClusters {
    tags: BTreeSet<String>,
    unlisted: BTreeSet<String>,
}

impl UsedClusters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cluster: ClusterRef<'_>) -> bool {
        match cluster {
            ClusterRef::Tag(tag) => self.tags.contains(tag),
            ClusterRef::Unlisted(word) => self.unlisted.contains(word),
        }
    }

    /// Returns `false` if the cluster was already taken.
    pub fn insert(&mut self, cluster: ClusterRef<'_>) -> bool {
        match cluster {
            ClusterRef::Tag(tag) => self.tags.insert(tag.to_string()),
            ClusterRef::Unlisted(word) => self.unlisted.insert(word.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len() + self.unlisted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.unlisted.is_empty()
    }
}
