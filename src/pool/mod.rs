pub mod lexicon;
mod ordered;
pub mod word_pool;

pub use lexicon::{Lexicon, LexiconEntry, LexiconError};
pub use word_pool::{PoolError, Slot, Theme, WordPool};
