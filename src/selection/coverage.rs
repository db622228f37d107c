use crate::pool::Theme;
use crate::rng::{EmptySequence, Xoroshiro128Plus};

use super::{ClusterRef, UsedClusters};

/// Pick one word from every non-empty slot, in slot order.
///
/// Candidates are the slot's words whose cluster is still free; the winner is
/// the head of a shuffle of those candidates. When every cluster of a slot is
/// already taken the slot still contributes a word, chosen from the whole slot
/// without marking anything.
pub fn select_slot_coverage(
    theme: &Theme,
    rng: &mut Xoroshiro128Plus,
    used_clusters: &mut UsedClusters,
) -> Result<Vec<String>, EmptySequence> {
    let mut selected = Vec::with_capacity(theme.slots.len());

    for (_, slot) in &theme.slots {
        if slot.is_empty() {
            continue;
        }

        let candidates: Vec<(&str, &str)> = slot
            .entries()
            .filter(|&(_, cluster)| !used_clusters.contains(ClusterRef::Tag(cluster)))
            .collect();

        match rng.shuffle(&candidates).first() {
            Some(&(word, cluster)) => {
                used_clusters.insert(ClusterRef::Tag(cluster));
                selected.push(word.to_string());
            }
            None => {
                // Relaxed: this slot's clusters are exhausted.
                let word = rng.choice(&slot.words)?;
                selected.push(word.clone());
            }
        }
    }

    Ok(selected)
}
