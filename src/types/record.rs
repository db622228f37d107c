use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::SeedHex;

/// The stored outcome of deriving one calendar day's seed.
///
/// Everything except `created_at` is a pure function of the secret and the
/// date, so two records written for the same day only differ in timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    pub seed_hex: SeedHex,
    pub theme_name: String,
    pub pool_version: String,
    pub created_at: DateTime<Utc>, // informational only
}

impl SeedRecord {
    /// True when both records carry the same derived content.
    pub fn same_content(&self, other: &SeedRecord) -> bool {
        self.seed_hex == other.seed_hex
            && self.theme_name == other.theme_name
            && self.pool_version == other.pool_version
    }
}
