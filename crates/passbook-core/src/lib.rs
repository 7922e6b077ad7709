//! Passbook Core
//!
//! Coordination layer between the UI front end and the two leaf crates.
//! The core holds no UI state: inputs arrive as parameters and results
//! go back as return values.

mod config;
mod error;
mod vault;

pub use config::Config;
pub use error::CoreError;
pub use vault::Vault;

// Re-export core components
pub use passbook_generator::{CharClass, PasswordGenerator};
pub use passbook_store::{Credential, Document, Entry, ErrorKind, Field, RecordStore, StoreError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging to stderr.
///
/// Honours `RUST_LOG`; defaults to `warn` so log lines stay out of the
/// way of command output.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
