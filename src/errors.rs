use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RandError>;

#[derive(Debug, Error)]
pub enum RandError {
    #[error("minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("cannot draw from an empty range")]
    EmptyRange,

    #[error("unknown character category '{name}' (expected one of: {expected})")]
    UnknownCategory { name: String, expected: String },

    #[error("you cannot both include and exclude characters")]
    IncludeExcludeConflict,

    #[error("no characters were included or all were excluded")]
    EmptyAlphabet,

    #[error("no {0} found")]
    EmptyWordList(&'static str),

    #[error("could not read {}: {source}", path.display())]
    WordListRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write output: {0}")]
    Output(#[source] io::Error),

    #[error("cannot choose {count} distinct items, only {available} available")]
    TooManyChoices { count: usize, available: usize },

    #[error(
        "number of items to choose ({count}) must be less than number of items available ({available})"
    )]
    ChoicesNotFewer { count: usize, available: usize },

    #[error("could not read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("operating system entropy source failed: {0}")]
    Entropy(String),
}
