use std::path::PathBuf;

/// Name of the history file inside the data directory
pub const DATA_FILE_NAME: &str = "elo_history.json";

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the history file
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of the JSON history file
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }
}
