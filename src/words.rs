//! Noun and adjective lists for `randtxt name`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{RandError, Result};

pub const NOUNS_FILE: &str = "nouns.txt";
pub const ADJECTIVES_FILE: &str = "adjectives.txt";

const BUILTIN_NOUNS: &str = include_str!("../words/nouns.txt");
const BUILTIN_ADJECTIVES: &str = include_str!("../words/adjectives.txt");

#[derive(Debug, Clone)]
pub struct WordLists {
    pub nouns: Vec<String>,
    pub adjectives: Vec<String>,
}

impl WordLists {
    /// Reads both lists from `dir`, one word per line.
    pub fn load(dir: &Path) -> Result<Self> {
        let nouns = read_list(&dir.join(NOUNS_FILE))?;
        let adjectives = read_list(&dir.join(ADJECTIVES_FILE))?;

        if nouns.is_empty() {
            return Err(RandError::EmptyWordList("nouns"));
        }
        if adjectives.is_empty() {
            return Err(RandError::EmptyWordList("adjectives"));
        }

        debug!(
            dir = %dir.display(),
            nouns = nouns.len(),
            adjectives = adjectives.len(),
            "loaded word lists"
        );
        Ok(Self { nouns, adjectives })
    }

    /// The lists compiled in from `words/`.
    pub fn builtin() -> Self {
        Self {
            nouns: parse_list(BUILTIN_NOUNS),
            adjectives: parse_list(BUILTIN_ADJECTIVES),
        }
    }
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|source| RandError::WordListRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_list(&raw))
}

/// Blank lines are dropped; surrounding whitespace is not part of a word.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Finds the lists to use: the explicit override, then the configured
/// directory, then next to the executable (or its `words/` subdirectory),
/// and finally the lists compiled into the binary.
pub fn discover(explicit: Option<&Path>, configured: Option<&Path>) -> Result<WordLists> {
    if let Some(dir) = explicit.or(configured) {
        return WordLists::load(dir);
    }

    for dir in install_dirs() {
        if dir.join(NOUNS_FILE).is_file() && dir.join(ADJECTIVES_FILE).is_file() {
            return WordLists::load(&dir);
        }
    }

    debug!("using built-in word lists");
    Ok(WordLists::builtin())
}

fn install_dirs() -> Vec<PathBuf> {
    match env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| vec![dir.to_path_buf(), dir.join("words")])
            .unwrap_or_default(),
        Err(e) => {
            debug!(error = %e, "cannot locate executable");
            Vec::new()
        }
    }
}
