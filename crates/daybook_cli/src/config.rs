//! Journal directory configuration.
//!
//! # Responsibility
//! - Resolve the journal base directory once at process start.
//! - Keep the resolution order stable: environment override, then
//!   config file, then the `<home>/media/journal` default.

use directories::{ProjectDirs, UserDirs};
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::{env, fs};

/// Environment variable overriding the journal directory.
pub const JOURNAL_DIR_ENV: &str = "DAYBOOK_JOURNAL_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Optional on-disk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Journal base directory; the built-in default applies when unset.
    pub journal_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    /// No home directory available to anchor the default journal path.
    HomeDirUnavailable,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeDirUnavailable => {
                write!(f, "could not determine a home directory for the journal folder")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolves the journal base directory.
///
/// Order: `DAYBOOK_JOURNAL_DIR` when set and non-empty, then
/// `journal_dir` from the platform config file, then
/// `<home>/media/journal`.
pub fn resolve_journal_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env::var_os(JOURNAL_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    if let Some(dir) = config_file_journal_dir() {
        return Ok(dir);
    }

    default_journal_dir()
}

/// Returns the built-in journal location, `<home>/media/journal`.
pub fn default_journal_dir() -> Result<PathBuf, ConfigError> {
    let user_dirs = UserDirs::new().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(user_dirs.home_dir().join("media").join("journal"))
}

fn config_file_journal_dir() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "daybook", "Daybook")?;
    let path = dirs.config_dir().join(CONFIG_FILE_NAME);
    let raw = fs::read_to_string(&path).ok()?;
    match toml::from_str::<ConfigFile>(&raw) {
        Ok(parsed) => parsed.journal_dir,
        Err(err) => {
            warn!(
                "event=config_parse module=cli status=error path={} error={err}",
                path.display()
            );
            None
        }
    }
}
