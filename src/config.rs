//! Support for assistant configuration options

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings of an [`Assistant`](crate::assistant::Assistant)
///
/// Can be read from a JSON file such as `{"name": "Simba", "storage_path": "simba.txt"}`.
/// Missing fields keep their default value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The name the assistant introduces itself with
    pub name: String,
    /// The file the task list is stored into
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::from("Simba"),
            storage_path: PathBuf::from("simba.txt"),
        }
    }
}

impl Config {
    /// Read a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }
}
