//! Optional JSON settings file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{RandError, Result};

const APP_DIR: &str = "randtxt";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding `nouns.txt` and `adjectives.txt`.
    pub words_dir: Option<PathBuf>,
    /// Whether `choices` may pick every distinct item. When false the
    /// count must be strictly smaller.
    pub choices_allow_all: bool,
    /// Adds a space to the `special` category.
    pub special_includes_space: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_dir: None,
            choices_allow_all: true,
            special_includes_space: false,
        }
    }
}

impl Config {
    /// An explicit path must exist; the per-user default is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => match default_path() {
                Some(path) => match Self::read(&path) {
                    Err(RandError::ConfigRead { source, .. })
                        if source.kind() == ErrorKind::NotFound =>
                    {
                        debug!(path = %path.display(), "no config file, using defaults");
                        Ok(Self::default())
                    }
                    other => other,
                },
                None => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| RandError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| RandError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
