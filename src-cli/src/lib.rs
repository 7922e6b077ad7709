//! Passbook - command-line front end
//!
//! Parses arguments, asks for confirmation and prints results.
//! All state lives in `passbook_core`; this crate only moves values
//! between the terminal and the vault.

mod clipboard;
mod commands;
mod prompt;
mod state;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use passbook_core::Config;

pub use clipboard::{Clipboard, SystemClipboard};
pub use state::AppState;

#[derive(Parser)]
#[command(name = "passbook")]
#[command(version)]
#[command(about = "Passbook - store site logins and generate passwords")]
#[command(after_help = "EXAMPLES:
  passbook generate                          Generate a password and copy it
  passbook add example.com -e me@mail.com    Save details (prompts for password)
  passbook add example.com --generate        Save with a generated password
  passbook search example.com                Show saved email and password")]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random password and copy it to the clipboard
    Generate {
        /// Only print the password
        #[arg(long)]
        no_copy: bool,
    },

    /// Save the email and password for a site
    Add {
        /// Website the details belong to
        site: String,
        /// Email or username (defaults to the configured email)
        #[arg(short, long)]
        email: Option<String>,
        /// Password to save (prompted for when omitted)
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate the password instead of entering one
        #[arg(short, long)]
        generate: bool,
        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the saved details for a site
    Search {
        /// Website to look up
        site: String,
    },
}

pub fn run() {
    passbook_core::init_logging();

    let cli = Cli::parse();

    match cli.command {
        None => {
            println!("Passbook - store site logins and generate passwords");
            println!();
            println!("Run 'passbook --help' for usage information.");
        }
        Some(cmd) => {
            if let Err(e) = handle_command(cli.config, cli.file, cmd) {
                eprintln!("{}", error_message(&e));
                std::process::exit(1);
            }
        }
    }
}

/// Top-level error line, including every cause in the chain
fn error_message(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}

fn handle_command(
    config_path: Option<PathBuf>,
    data_file: Option<PathBuf>,
    cmd: Commands,
) -> anyhow::Result<()> {
    let config_path = config_path.unwrap_or_else(Config::default_path);
    let mut config = Config::load(&config_path)?;
    if let Some(data_file) = data_file {
        config = config.with_data_file(data_file);
    }

    let state = AppState::new(config, Box::new(SystemClipboard));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Commands::Generate { no_copy } => {
            commands::generate::run(&state, !no_copy, &mut out)?;
        }
        Commands::Add {
            site,
            email,
            password,
            generate,
            yes,
        } => {
            let args = commands::add::AddArgs {
                site,
                email,
                password,
                generate,
                yes,
            };
            commands::add::run(&state, args, &mut prompt::Terminal, &mut input, &mut out)?;
        }
        Commands::Search { site } => {
            commands::search::run(&state, &site, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_password_conflicts_with_generate() {
        let result = Cli::try_parse_from([
            "passbook",
            "add",
            "example.com",
            "--password",
            "Zz1!",
            "--generate",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_file_flag() {
        let cli = Cli::try_parse_from(["passbook", "search", "example.com", "--file", "x.json"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Some(Commands::Search { ref site }) if site == "example.com"));
    }

    #[test]
    fn test_error_message_includes_causes() {
        let cause = passbook_core::StoreError::Corrupt {
            path: PathBuf::from("data.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        let err = anyhow::Error::from(passbook_core::CoreError::from(cause));

        let message = error_message(&err);
        assert!(message.starts_with("Error: Data file data.json is corrupt: EOF"));
    }
}
