use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::types::{CalendarDate, SeedRecord};

use super::{SeedStore, StoreError};

/// One pretty-printed JSON file per date under `root`.
///
/// Writes go to a temp file in the same directory and are renamed into place,
/// so readers never observe a partial record. Concurrent writers for the same
/// date each rename a complete file; the last rename wins.
#[derive(Debug, Clone)]
pub struct FileSeedStore {
    root: PathBuf,
}

impl FileSeedStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, date: &CalendarDate) -> PathBuf {
        self.root.join(format!("{date}.json"))
    }
}

impl SeedStore for FileSeedStore {
    fn get(&self, date: &CalendarDate) -> Result<Option<SeedRecord>, StoreError> {
        let path = self.path_for(date);
        let f = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: SeedRecord = serde_json::from_reader(f)?;
        Ok(Some(record))
    }

    fn set(&self, date: &CalendarDate, record: &SeedRecord) -> Result<(), StoreError> {
        let temp_file = NamedTempFile::new_in(&self.root)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, record)?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(self.path_for(date))
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}
