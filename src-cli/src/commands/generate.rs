//! Password generation command
use std::io::{self, Write};

use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, copy: bool, out: &mut W) -> anyhow::Result<()> {
    let password = state.vault().generate_password();
    writeln!(out, "{password}")?;

    if copy {
        copy_to_clipboard(state, &password, out)?;
    }

    Ok(())
}

/// Copy a password to the clipboard. A missing clipboard is reported but
/// does not fail the command.
pub(crate) fn copy_to_clipboard<W: Write>(
    state: &AppState,
    password: &str,
    out: &mut W,
) -> io::Result<()> {
    match state.clipboard().copy(password) {
        Ok(()) => writeln!(out, "Copied to clipboard."),
        Err(e) => {
            tracing::warn!(error = %e, "Could not copy password to clipboard");
            writeln!(out, "Clipboard unavailable: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{temp_state, BrokenClipboard};
    use passbook_core::{CharClass, Config};
    use tempfile::TempDir;

    #[test]
    fn test_generate_prints_and_copies() {
        let (_dir, state, clipboard) = temp_state();
        let mut out = Vec::new();

        run(&state, true, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let password = output.lines().next().unwrap();
        assert!(password.chars().all(|c| CharClass::of(c).is_some()));
        assert_eq!(clipboard.copied.borrow().as_slice(), [password.to_string()]);
        assert!(output.contains("Copied to clipboard."));
    }

    #[test]
    fn test_no_copy_prints_only_password() {
        let (_dir, state, clipboard) = temp_state();
        let mut out = Vec::new();

        run(&state, false, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(clipboard.copied.borrow().is_empty());
    }

    #[test]
    fn test_clipboard_failure_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(
            Config::new(dir.path().to_path_buf()),
            Box::new(BrokenClipboard),
        );
        let mut out = Vec::new();

        run(&state, true, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Clipboard unavailable"));
    }
}
