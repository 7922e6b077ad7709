//! Credential lookup command
use std::io::Write;

use passbook_core::{CoreError, StoreError};

use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, site: &str, out: &mut W) -> anyhow::Result<()> {
    match state.vault().lookup(site) {
        Ok(credential) => {
            writeln!(out, "{}", site.trim())?;
            writeln!(out, "Email: {}", credential.email)?;
            writeln!(out, "Password: {}", credential.password)?;
            Ok(())
        }
        Err(CoreError::Store(StoreError::NoDocument(path))) => Err(anyhow::anyhow!(
            "No data file exists at {}. Save details for a site and try again.",
            path.display()
        )),
        Err(e) => Err(e.into()),
    }
}
