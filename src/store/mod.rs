//! Seed-store collaborators: one [`SeedRecord`] per calendar date.
//!
//! Stores are written at most once per date in the happy path, but racing
//! first requests may call `set` more than once with identical content.
//! Implementations must tolerate that.

pub mod file;
pub mod memory;

use thiserror::Error;

use crate::types::{CalendarDate, SeedRecord};

pub use file::FileSeedStore;
pub use memory::MemorySeedStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store lock poisoned")]
    Poisoned,
}

pub trait SeedStore: Send + Sync {
    fn get(&self, date: &CalendarDate) -> Result<Option<SeedRecord>, StoreError>;

    fn set(&self, date: &CalendarDate, record: &SeedRecord) -> Result<(), StoreError>;
}

impl<S: SeedStore + ?Sized> SeedStore for &S {
    fn get(&self, date: &CalendarDate) -> Result<Option<SeedRecord>, StoreError> {
        (**self).get(date)
    }

    fn set(&self, date: &CalendarDate, record: &SeedRecord) -> Result<(), StoreError> {
        (**self).set(date, record)
    }
}

impl<S: SeedStore + ?Sized> SeedStore for Box<S> {
    fn get(&self, date: &CalendarDate) -> Result<Option<SeedRecord>, StoreError> {
        (**self).get(date)
    }

    fn set(&self, date: &CalendarDate, record: &SeedRecord) -> Result<(), StoreError> {
        (**self).set(date, record)
    }
}
