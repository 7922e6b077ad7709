//! Interactive prompts

use std::io::{self, BufRead, Write};

/// Source of input that must not be echoed
pub trait SecretInput {
    fn read_secret(&mut self) -> io::Result<String>;
}

/// Reads from the controlling terminal with echo turned off
pub struct Terminal;

impl SecretInput for Terminal {
    fn read_secret(&mut self) -> io::Result<String> {
        rpassword::read_password()
    }
}

/// Ask a yes/no question. Only `y` or `yes` count as approval; anything
/// else, including end of input, is a refusal.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<bool> {
    write!(out, "{message} [y/N]: ")?;
    out.flush()?;

    let answer = read_line(input)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Prompt for a secret without echoing it
pub fn ask_secret<S: SecretInput, W: Write>(
    secret: &mut S,
    out: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(out, "{label}: ")?;
    out.flush()?;

    secret.read_secret()
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedSecret;
    use std::io::Cursor;

    fn confirm_with(answer: &str) -> bool {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();
        confirm(&mut input, &mut out, "Save?").unwrap()
    }

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(confirm_with("y\n"));
        assert!(confirm_with("YES\r\n"));
        assert!(confirm_with("  Yes  \n"));
    }

    #[test]
    fn test_confirm_refuses_everything_else() {
        assert!(!confirm_with("n\n"));
        assert!(!confirm_with("\n"));
        assert!(!confirm_with("sure\n"));
        assert!(!confirm_with(""));
    }

    #[test]
    fn test_confirm_writes_prompt() {
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut out = Vec::new();
        confirm(&mut input, &mut out, "Is it okay to save?").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Is it okay to save? [y/N]: ");
    }

    #[test]
    fn test_ask_secret_writes_only_the_label() {
        let mut secret = ScriptedSecret::new("hunter2");
        let mut out = Vec::new();

        assert_eq!(ask_secret(&mut secret, &mut out, "Password").unwrap(), "hunter2");
        assert_eq!(String::from_utf8(out).unwrap(), "Password: ");
    }
}
