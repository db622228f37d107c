//! Engine configuration and startup loading.
//!
//! Startup either yields a fully loaded engine or a
//! [`SeedingError::Configuration`]; there is no partially configured state.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pool::{Lexicon, WordPool};
use crate::seeding::SeedingOrchestrator;
use crate::store::{FileSeedStore, MemorySeedStore, SeedStore};
use crate::types::SeedingError;

pub const ENV_SECRET: &str = "WORDSEED_SECRET";
pub const ENV_POOL: &str = "WORDSEED_POOL";
pub const ENV_LEXICON: &str = "WORDSEED_LEXICON";
pub const ENV_STORE_DIR: &str = "WORDSEED_STORE_DIR";

pub const DEFAULT_POOL_PATH: &str = "data/pool.json";
pub const DEFAULT_LEXICON_PATH: &str = "data/lexicon.json";

#[derive(Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// HMAC root key. 64 hex characters recommended.
    pub secret: String,
    pub pool_path: PathBuf,
    pub lexicon_path: PathBuf,
    /// Directory for the file seed store; in-memory when absent.
    pub store_dir: Option<PathBuf>,
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("secret", &"<redacted>")
            .field("pool_path", &self.pool_path)
            .field("lexicon_path", &self.lexicon_path)
            .field("store_dir", &self.store_dir)
            .finish()
    }
}

/// Documents and secret read at startup, immutable afterwards.
#[derive(Clone)]
pub struct LoadedEngine {
    pub secret: String,
    pub pool: WordPool,
    pub lexicon: Lexicon,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, SeedingError> {
        let secret = std::env::var(ENV_SECRET)
            .map_err(|_| SeedingError::Configuration(format!("{ENV_SECRET} is not set")))?;

        let path_or = |key: &str, default: &str| {
            std::env::var_os(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        let config = Self {
            secret,
            pool_path: path_or(ENV_POOL, DEFAULT_POOL_PATH),
            lexicon_path: path_or(ENV_LEXICON, DEFAULT_LEXICON_PATH),
            store_dir: std::env::var_os(ENV_STORE_DIR).map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SeedingError> {
        if self.secret.is_empty() {
            return Err(SeedingError::Configuration(format!("{ENV_SECRET} is empty")));
        }
        Ok(())
    }

    /// Read and validate both documents.
    pub fn load(&self) -> Result<LoadedEngine, SeedingError> {
        self.validate()?;

        let pool = WordPool::from_path(&self.pool_path).map_err(|e| {
            SeedingError::Configuration(format!("pool {}: {e}", self.pool_path.display()))
        })?;
        let lexicon = Lexicon::from_path(&self.lexicon_path).map_err(|e| {
            SeedingError::Configuration(format!("lexicon {}: {e}", self.lexicon_path.display()))
        })?;

        pool.check_lexicon(&lexicon).map_err(|e| {
            SeedingError::Configuration(format!("lexicon {}: {e}", self.lexicon_path.display()))
        })?;

        info!(
            pool_version = %pool.version,
            lexicon_version = %lexicon.version,
            themes = pool.theme_count(),
            lexicon_entries = lexicon.len(),
            "word documents loaded"
        );

        Ok(LoadedEngine {
            secret: self.secret.clone(),
            pool,
            lexicon,
        })
    }

    /// Load everything and wire up the configured seed store.
    pub fn build_orchestrator(
        &self,
    ) -> Result<SeedingOrchestrator<Box<dyn SeedStore>>, SeedingError> {
        let loaded = self.load()?;

        let store: Box<dyn SeedStore> = match &self.store_dir {
            Some(dir) => Box::new(FileSeedStore::open(dir).map_err(|e| {
                SeedingError::Configuration(format!("seed store {}: {e}", dir.display()))
            })?),
            None => Box::new(MemorySeedStore::new()),
        };

        SeedingOrchestrator::new(loaded.secret, loaded.pool, loaded.lexicon, store)
    }
}
