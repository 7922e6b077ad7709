//! Passbook Record Store
//!
//! Persists a mapping of site name -> {email, password} in one JSON file.
//! - Every operation reads the whole document, mutates it in memory and
//!   writes it back in full
//! - A missing file is an empty store; an unreadable or corrupt file is an
//!   error and is never overwritten
//! - Writes go to a temp file first and are renamed into place

mod document;
mod error;
mod record;
mod store;

pub use document::Document;
pub use error::{ErrorKind, StoreError};
pub use record::{Credential, Entry, Field};
pub use store::{RecordStore, INDENT};

pub type Result<T> = std::result::Result<T, StoreError>;
