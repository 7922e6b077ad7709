//! Passbook configuration

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

const DATA_FILE: &str = "data.json";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_EMAIL: &str = "example@email.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON data file
    pub data_file: PathBuf,
    /// Email offered when none is given
    pub default_email: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_file: data_dir.join(DATA_FILE),
            default_email: DEFAULT_EMAIL.to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        platform_data_dir()
            .map(|d| d.join("Passbook"))
            .unwrap_or_else(|| PathBuf::from(".passbook"))
    }

    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        Self::data_dir().join(CONFIG_FILE)
    }

    /// Load configuration from a JSON file.
    ///
    /// A missing file gives the defaults. Keys left out of the file keep
    /// their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::Config(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| CoreError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    pub fn with_data_file(mut self, data_file: PathBuf) -> Self {
        self.data_file = data_file;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

/// Per-user data directory of the platform, before the `Passbook` suffix
fn platform_data_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        env_dir("LOCALAPPDATA")
    } else if cfg!(target_os = "macos") {
        env_dir("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        env_dir("XDG_DATA_HOME")
            .or_else(|| env_dir("HOME").map(|home| home.join(".local").join("share")))
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).and_then(absolute_dir)
}

/// Relative or empty values are ignored so the data file never lands
/// somewhere that depends on the working directory.
fn absolute_dir(value: OsString) -> Option<PathBuf> {
    let path = PathBuf::from(value);
    path.is_absolute().then_some(path)
}
