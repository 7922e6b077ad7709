//! Save command: validate, confirm, write
use std::io::{BufRead, Write};

use crate::commands::generate::copy_to_clipboard;
use crate::prompt::{self, SecretInput};
use crate::state::AppState;

pub struct AddArgs {
    pub site: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub generate: bool,
    pub yes: bool,
}

pub fn run<S: SecretInput, R: BufRead, W: Write>(
    state: &AppState,
    args: AddArgs,
    secret: &mut S,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let vault = state.vault();

    let email = args
        .email
        .unwrap_or_else(|| vault.config().default_email.clone());

    let generated = args.password.is_none() && args.generate;
    let password = match args.password {
        Some(password) => password,
        None if generated => vault.generate_password(),
        None => prompt::ask_secret(secret, out, "Password")?,
    };

    // Validation runs before the user is asked anything
    let entry = vault.stage(&args.site, &email, &password)?;

    if generated {
        writeln!(out, "Generated password: {password}")?;
        copy_to_clipboard(state, &password, out)?;
    }

    if !args.yes {
        let message = format!(
            "These are the details entered for {}:\nEmail: {}\nPassword: {}\nIs it okay to save?",
            entry.site(),
            entry.credential().email,
            entry.credential().password
        );
        if !prompt::confirm(input, out, &message)? {
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    let site = entry.site().to_string();
    vault.commit(entry)?;

    writeln!(out, "Saved details for {site}.")?;

    Ok(())
}
