//! Application state for one CLI invocation
use passbook_core::{Config, Vault};

use crate::clipboard::Clipboard;

pub struct AppState {
    vault: Vault,
    clipboard: Box<dyn Clipboard>,
}

impl AppState {
    pub fn new(config: Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            vault: Vault::new(config),
            clipboard,
        }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }
}
