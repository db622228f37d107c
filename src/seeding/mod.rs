pub mod orchestrator;

pub use orchestrator::{
    SeedingOrchestrator, DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT, WILDCARD_RESERVE,
};
