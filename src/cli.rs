use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "randtxt", version, about = "Generate random text")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "RANDTXT_WORDS_DIR",
        help = "Directory containing nouns.txt and adjectives.txt"
    )]
    pub words_dir: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random number
    #[command(allow_negative_numbers = true)]
    Num {
        /// Minimum possible number
        min: i64,
        /// Maximum possible number
        max: i64,
    },
    /// Generate random names
    Name {
        /// Number of names to generate
        count: usize,
    },
    /// Generate a random password
    #[command(
        long_about = "Generate a random password.\n\nYou cannot both include and exclude characters or character categories.\nCategories: alphabet, lower, upper, number, special."
    )]
    Pass {
        /// Length of password to generate
        length: usize,
        /// Characters to exclude from random password generation
        #[arg(short = 'x', long, allow_hyphen_values = true)]
        exclude: Option<String>,
        /// Character categories to exclude (also -xc)
        #[arg(long = "exclude-category", value_name = "CATEGORY", num_args = 0..)]
        exclude_category: Vec<String>,
        /// Characters to include in random password generation
        #[arg(short = 'i', long, allow_hyphen_values = true)]
        include: Option<String>,
        /// Character categories to include (also -ic)
        #[arg(long = "include-category", value_name = "CATEGORY", num_args = 0..)]
        include_category: Vec<String>,
    },
    /// Choose a random color
    Color,
    /// Choose a random item from a list
    Choice {
        /// Items to choose from
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Choose multiple random items from a list without replacement
    Choices {
        /// Number of items to choose
        count: usize,
        /// Items to choose from
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Shuffle a list
    Shuffle {
        /// Items to shuffle
        #[arg(required = true)]
        items: Vec<String>,
    },
}

const VALUE_FLAGS: [&str; 4] = ["-x", "--exclude", "-i", "--include"];

/// Rewrites the two-letter `-xc` and `-ic` flags of `pass` into their long
/// forms; clap short flags are a single character. The value following
/// `-x`/`-i` is passed through untouched since it may itself start with `-`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut in_pass = false;
    let mut takes_value = false;
    args.into_iter()
        .map(|arg| {
            if takes_value {
                takes_value = false;
                return arg;
            }
            if in_pass {
                if arg == "-xc" {
                    return OsString::from("--exclude-category");
                }
                if arg == "-ic" {
                    return OsString::from("--include-category");
                }
                takes_value = VALUE_FLAGS.iter().any(|flag| arg == *flag);
            } else if arg == "pass" {
                in_pass = true;
            }
            arg
        })
        .collect()
}
