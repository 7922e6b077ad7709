//! Core error types

use thiserror::Error;

use passbook_store::ErrorKind;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] passbook_store::StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Store error classification, `None` for configuration problems
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CoreError::Store(e) => Some(e.kind()),
            CoreError::Config(_) => None,
        }
    }
}
