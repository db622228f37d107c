pub mod derivation;

pub use derivation::{derive_daily_seed, derive_user_seed, seed_to_u64};
