//! History persistence module
//!
//! Reads and writes the whole Elo history as one JSON file
//! (elo_history.json). Every command loads the full file and mutating
//! commands rewrite it in full.

mod format;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{EloError, Result};
use crate::models::EloHistory;

/// Load the history from `path`; a missing file is an empty history
pub fn load(path: &Path) -> Result<EloHistory> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No history file at {}, starting empty", path.display());
            return Ok(EloHistory::new());
        }
        Err(e) => return Err(e.into()),
    };

    let stored: format::StoredHistory = serde_json::from_str(&content)?;
    let history = format::from_stored(stored)?;

    if history.is_empty() {
        log::debug!("History file {} holds no days", path.display());
    } else {
        log::debug!("Loaded {} day(s) from {}", history.len(), path.display());
    }
    Ok(history)
}

/// Overwrite `path` with the full history, keys sorted ascending
pub fn save(history: &EloHistory, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&format::to_stored(history))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)?;
    log::debug!("Saved {} day(s) to {}", history.len(), path.display());
    Ok(())
}
