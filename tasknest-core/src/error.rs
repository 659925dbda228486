//! Storage error taxonomy for the pattern store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {key}: {reason}")]
    Parse { key: String, reason: String },
}

impl StoreError {
    pub fn key(&self) -> &str {
        match self {
            StoreError::Read { key, .. }
            | StoreError::Write { key, .. }
            | StoreError::Parse { key, .. } => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
