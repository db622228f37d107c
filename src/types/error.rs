use std::fmt;

use thiserror::Error;

use crate::rng::EmptySequence;
use crate::store::StoreError;

/// Which seed-store call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Get,
    Set,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::Get => f.write_str("get"),
            StoreOperation::Set => f.write_str("set"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedingError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Theme not found in loaded pool: {0}")]
    ThemeNotFound(String),

    #[error("Seed store {operation} failed for {date}: {source}")]
    Dependency {
        operation: StoreOperation,
        date: String,
        #[source]
        source: StoreError,
    },

    #[error("choice() called on an empty sequence")]
    EmptyInput(#[from] EmptySequence),
}

impl SeedingError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        SeedingError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SeedingError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
