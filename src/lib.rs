//! Deterministic daily word sets.
//!
//! `wordseed` gives every participant a personal, reproducible list of words
//! for each calendar day. The list is a pure function of a secret, the date,
//! the user id, the requested size and the loaded word documents: an
//! HMAC-SHA256 chain produces a 64-bit seed, a Xoroshiro128+ generator is
//! built from it, and a three-phase selector (slot coverage, diversity fill,
//! wildcards) picks words under uniqueness and one-word-per-cluster rules.
//!
//! Nothing is cached per user; the only persisted state is one seed record
//! per day, and that record can always be re-derived.

pub mod config;
pub mod crypto;
pub mod pool;
pub mod rng;
pub mod seeding;
pub mod selection;
pub mod store;
pub mod types;

pub use config::{EngineConfig, LoadedEngine};
pub use seeding::SeedingOrchestrator;
pub use types::{SeedRecord, SeedingError};
