use std::collections::BTreeSet;

use crate::pool::Lexicon;
use crate::rng::Xoroshiro128Plus;

use super::{ClusterRef, UsedClusters};

fn cluster_for<'a>(word: &'a str, lexicon: &'a Lexicon) -> ClusterRef<'a> {
    match lexicon.cluster_of(word) {
        Some(tag) => ClusterRef::Tag(tag),
        None => ClusterRef::Unlisted(word),
    }
}

/// Shuffle once, then take words greedily while their cluster is free.
/// No backtracking.
fn scan<F>(
    all_words: &[String],
    budget: usize,
    rng: &mut Xoroshiro128Plus,
    used_clusters: &mut UsedClusters,
    lexicon: &Lexicon,
    skip: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut picked = Vec::new();

    for word in rng.shuffle(all_words) {
        if picked.len() >= budget {
            break;
        }
        if skip(word.as_str()) {
            continue;
        }
        if used_clusters.insert(cluster_for(&word, lexicon)) {
            picked.push(word);
        }
    }

    picked
}

/// Up to `budget` words, each from a cluster not yet used.
///
/// May return fewer than `budget` when the pool runs out of free clusters.
pub fn select_diverse_fill(
    all_words: &[String],
    budget: usize,
    rng: &mut Xoroshiro128Plus,
    used_clusters: &mut UsedClusters,
    lexicon: &Lexicon,
) -> Vec<String> {
    scan(all_words, budget, rng, used_clusters, lexicon, |_| false)
}

/// Same scan as [`select_diverse_fill`], also skipping words already chosen.
/// `used_words` is only read.
pub fn select_wildcards(
    all_words: &[String],
    budget: usize,
    rng: &mut Xoroshiro128Plus,
    used_words: &BTreeSet<String>,
    used_clusters: &mut UsedClusters,
    lexicon: &Lexicon,
) -> Vec<String> {
    scan(all_words, budget, rng, used_clusters, lexicon, |word| {
        used_words.contains(word)
    })
}
