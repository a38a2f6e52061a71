mod charset;
mod cli;
mod colors;
mod config;
mod errors;
mod generators;
mod password;
mod random;
mod words;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::charset::CharTable;
use crate::cli::{Cli, Commands, normalize_args};
use crate::config::Config;
use crate::errors::{RandError, Result};
use crate::generators::{
    choose, choose_multiple, generate_color, generate_names, generate_number, shuffle_items,
};
use crate::password::{PasswordRequest, generate_password};
use crate::random::{OsRandom, RandomSource};

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(env::args_os()));
    init_logging(cli.verbose);

    let mut out = io::stdout().lock();
    match run(cli, &mut OsRandom, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Runs one command and writes its output to `out`. Every validation step
/// finishes before the first line is written, so a rejected command leaves
/// no partial output behind.
fn run(cli: Cli, rng: &mut impl RandomSource, out: &mut impl Write) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "effective config");

    let line = match cli.command {
        Commands::Num { min, max } => generate_number(rng, min, max)?.to_string(),
        Commands::Name { count } => {
            let lists = words::discover(cli.words_dir.as_deref(), config.words_dir.as_deref())?;
            for name in generate_names(rng, &lists, count) {
                emit(out, &name?)?;
            }
            return out.flush().map_err(RandError::Output);
        }
        Commands::Pass {
            length,
            exclude,
            exclude_category,
            include,
            include_category,
        } => {
            let request = PasswordRequest {
                length,
                include,
                include_categories: include_category,
                exclude,
                exclude_categories: exclude_category,
            };
            let table = CharTable::new(config.special_includes_space);
            generate_password(rng, &request, &table)?
        }
        Commands::Color => generate_color(rng)?.to_string(),
        Commands::Choice { items } => choose(rng, &items)?.to_string(),
        Commands::Choices { count, items } => {
            choose_multiple(rng, &items, count, config.choices_allow_all)?.join(" ")
        }
        Commands::Shuffle { items } => shuffle_items(rng, items)?.join(" "),
    };

    emit(out, &line)?;
    out.flush().map_err(RandError::Output)
}

fn emit(out: &mut impl Write, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(RandError::Output)
}
