//! Store error types

use std::path::PathBuf;
use thiserror::Error;

use crate::record::Field;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{} cannot be empty or filled with whitespace", join_fields(.fields))]
    Validation { fields: Vec<Field> },

    #[error("No data file exists at {}", .0.display())]
    NoDocument(PathBuf),

    #[error("No saved details exist for site: {0}")]
    SiteNotFound(String),

    #[error("Failed to access data file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file {} is corrupt", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification used by callers to pick a user-facing response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was blank; nothing was read or written
    Validation,
    /// The data file or the requested site does not exist
    NotFound,
    /// The data file could not be read, parsed or written
    Storage,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Validation { .. } => ErrorKind::Validation,
            StoreError::NoDocument(_) | StoreError::SiteNotFound(_) => ErrorKind::NotFound,
            StoreError::Io { .. } | StoreError::Corrupt { .. } => ErrorKind::Storage,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    let names: Vec<&str> = fields.iter().map(Field::as_str).collect();
    match names.as_slice() {
        [] => "Input".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
