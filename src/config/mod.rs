//! Configuration module
//!
//! Resolves where the history file lives. The data directory comes from
//! `ELO_TRACKER_DATA_DIR` when set, otherwise `~/.elo_tracker`.

mod types;

pub use types::Config;

use crate::error::{EloError, Result};
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ELO_TRACKER_DATA_DIR";

/// Default data directory name under the home directory
const DEFAULT_DIR_NAME: &str = ".elo_tracker";

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        resolve(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from), dirs::home_dir())
    }
}

fn resolve(override_dir: Option<PathBuf>, home: Option<PathBuf>) -> Result<Config> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        log::debug!("Using data directory from {}: {}", DATA_DIR_ENV, dir.display());
        return Ok(Config::new(dir));
    }

    let home = home.ok_or_else(|| {
        EloError::Config(format!(
            "Cannot determine home directory. Set {} to choose a data directory.",
            DATA_DIR_ENV
        ))
    })?;

    Ok(Config::new(home.join(DEFAULT_DIR_NAME)))
}
