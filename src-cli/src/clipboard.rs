//! System clipboard access through the platform's copy utility

use std::io::{self, Write};
use std::process::{Command, Stdio};

pub trait Clipboard {
    fn copy(&self, text: &str) -> io::Result<()>;
}

/// Pipes text into the first clipboard utility that works
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> io::Result<()> {
        let mut last_error = None;

        for (program, args) in CANDIDATES {
            match pipe_to(program, args, text) {
                Ok(()) => {
                    tracing::debug!(program, "Copied to clipboard");
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(program, error = %e, "Clipboard utility failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no clipboard utility available")
        }))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is dropped before waiting so the utility sees end of input
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Always reap the child, even when it stopped reading early
    let status = child.wait()?;
    if !status.success() {
        return Err(io::Error::other(format!("{program} exited with {status}")));
    }
    written?;

    Ok(())
}
