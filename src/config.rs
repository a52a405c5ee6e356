use crate::output::OutputFormat;
use crate::table::LongOpt;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "uniopt.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub optstring: Option<String>,
    pub format: Option<OutputFormat>,
    pub name: Option<String>,
    #[serde(default)]
    pub long: Vec<LongOpt>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Looks for `file_name` in `start` and its ancestors. The search ends at
/// the first directory holding a `.git` entry, so a project never picks up
/// a file from outside its repository.
pub fn find_config(start: &Path, file_name: &str) -> Option<PathBuf> {
    let start = if start.is_file() { start.parent()? } else { start };

    for dir in start.ancestors() {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }

    None
}
