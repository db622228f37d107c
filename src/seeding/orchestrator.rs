use std::collections::BTreeSet;

use chrono::Utc;
use tracing::debug;

use crate::crypto::{derive_daily_seed, derive_user_seed, seed_to_u64};
use crate::pool::{Lexicon, Theme, WordPool};
use crate::rng::Xoroshiro128Plus;
use crate::selection::{select_diverse_fill, select_slot_coverage, select_wildcards, UsedClusters};
use crate::store::SeedStore;
use crate::types::{CalendarDate, SeedHex, SeedRecord, SeedingError, StoreOperation, UserId};

pub const DEFAULT_WORD_COUNT: usize = 12;
pub const MIN_WORD_COUNT: usize = 1;
pub const MAX_WORD_COUNT: usize = 100;

/// Words held back for the wildcard phase, whatever the requested count.
pub const WILDCARD_RESERVE: usize = 2;

/// Hex characters of the daily seed used to pick the theme.
const THEME_INDEX_HEX_LEN: usize = 8;

/// Turns `(secret, date, user, count)` into a word list.
///
/// Holds no per-call state: the generator and the used-cluster set are built
/// fresh for every call, so one orchestrator can serve concurrent callers.
pub struct SeedingOrchestrator<S> {
    secret: String,
    pool: WordPool,
    lexicon: Lexicon,
    store: S,
}

impl<S: SeedStore> SeedingOrchestrator<S> {
    pub fn new(
        secret: impl Into<String>,
        pool: WordPool,
        lexicon: Lexicon,
        store: S,
    ) -> Result<Self, SeedingError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SeedingError::Configuration("seed secret is empty".into()));
        }
        pool.check_lexicon(&lexicon).map_err(|e| SeedingError::Configuration(e.to_string()))?;
        Ok(Self {
            secret,
            pool,
            lexicon,
            store,
        })
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the day's record, deriving and storing it on first use.
    ///
    /// The derived content depends only on the secret and the date, so a
    /// cleared store or a lost write race yields the same seed and theme.
    pub fn get_or_create_daily_seed(&self, date: &CalendarDate) -> Result<SeedRecord, SeedingError> {
        let stored = self
            .store
            .get(date)
            .map_err(|source| SeedingError::Dependency {
                operation: StoreOperation::Get,
                date: date.to_string(),
                source,
            })?;

        if let Some(record) = stored {
            debug!(%date, theme = %record.theme_name, "daily seed found in store");
            return Ok(record);
        }

        let seed_hex = derive_daily_seed(&self.secret, date)?;
        let theme = self.theme_for_seed(&seed_hex)?;

        let record = SeedRecord {
            seed_hex,
            theme_name: theme.name.clone(),
            pool_version: self.pool.version.clone(),
            created_at: Utc::now(),
        };

        self.store
            .set(date, &record)
            .map_err(|source| SeedingError::Dependency {
                operation: StoreOperation::Set,
                date: date.to_string(),
                source,
            })?;

        debug!(
            %date,
            theme = %record.theme_name,
            pool_version = %record.pool_version,
            "daily seed created"
        );
        Ok(record)
    }

    /// `parse_hex(seed[0..8]) mod theme_count`, over themes in document order.
    fn theme_for_seed(&self, seed_hex: &SeedHex) -> Result<&Theme, SeedingError> {
        let prefix = seed_hex
            .as_str()
            .get(..THEME_INDEX_HEX_LEN)
            .ok_or_else(|| SeedingError::validation("seedHex", "digest too short to pick a theme"))?;
        let value = u32::from_str_radix(prefix, 16)
            .map_err(|e| SeedingError::validation("seedHex", e.to_string()))?;

        let count = self.pool.theme_count();
        if count == 0 {
            return Err(SeedingError::Configuration("pool has no themes".into()));
        }
        let index = value as usize % count;

        self.pool
            .theme_at(index)
            .ok_or_else(|| SeedingError::Configuration(format!("theme index {index} out of range")))
    }

    /// The caller's word list for `date`, validated from raw inputs.
    ///
    /// Output order is slot coverage, then diversity fill, then wildcards,
    /// truncated to `count`.
    pub fn generate_user_word_set(
        &self,
        user_id: &str,
        date: &str,
        count: usize,
    ) -> Result<Vec<String>, SeedingError> {
        let date = CalendarDate::parse(date)?;
        let user = UserId::new(user_id)?;
        self.generate(&user, &date, count)
    }

    /// Same as [`generate_user_word_set`](Self::generate_user_word_set) for
    /// already-validated identifiers. `count` is range-checked here.
    pub fn generate(
        &self,
        user: &UserId,
        date: &CalendarDate,
        count: usize,
    ) -> Result<Vec<String>, SeedingError> {
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) {
            return Err(SeedingError::validation(
                "count",
                format!("must be an integer in [{MIN_WORD_COUNT}, {MAX_WORD_COUNT}], got {count}"),
            ));
        }

        let record = self.get_or_create_daily_seed(date)?;

        let user_seed = derive_user_seed(&record.seed_hex, user)?;
        let mut rng = Xoroshiro128Plus::new(seed_to_u64(&user_seed)?);

        let theme = self
            .pool
            .theme_by_name(&record.theme_name)
            .ok_or_else(|| SeedingError::ThemeNotFound(record.theme_name.clone()))?;

        let mut used_clusters = UsedClusters::new();
        let mut selected = select_slot_coverage(theme, &mut rng, &mut used_clusters)?;
        let all_words = theme.flatten();

        // Reserve-then-clamp: small counts skip the fill phase entirely.
        let fill_budget = count.saturating_sub(selected.len() + WILDCARD_RESERVE);
        if fill_budget > 0 {
            let fill = select_diverse_fill(
                &all_words,
                fill_budget,
                &mut rng,
                &mut used_clusters,
                &self.lexicon,
            );
            selected.extend(fill);
        }

        let wildcard_budget = WILDCARD_RESERVE.min(count.saturating_sub(selected.len()));
        if wildcard_budget > 0 {
            let used_words: BTreeSet<String> = selected.iter().cloned().collect();
            let wildcards = select_wildcards(
                &all_words,
                wildcard_budget,
                &mut rng,
                &used_words,
                &mut used_clusters,
                &self.lexicon,
            );
            selected.extend(wildcards);
        }

        selected.truncate(count);
        Ok(selected)
    }
}
