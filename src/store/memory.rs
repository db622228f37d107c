use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::types::{CalendarDate, SeedRecord};

use super::{SeedStore, StoreError};

/// Process-local store. Contents vanish with the process, which is harmless:
/// a missing record is simply re-derived.
#[derive(Debug, Default)]
pub struct MemorySeedStore {
    records: Mutex<BTreeMap<CalendarDate, SeedRecord>>,
}

impl MemorySeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.records.lock().map_err(|_| StoreError::Poisoned)?.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records.lock().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl SeedStore for MemorySeedStore {
    fn get(&self, date: &CalendarDate) -> Result<Option<SeedRecord>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(date).cloned())
    }

    fn set(&self, date: &CalendarDate, record: &SeedRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.insert(*date, record.clone());
        Ok(())
    }
}
