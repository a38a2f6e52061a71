use crate::charset::{CharTable, ResolutionRequest, parse_categories};
use crate::errors::{RandError, Result};
use crate::random::RandomSource;

/// Password options as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PasswordRequest {
    pub length: usize,
    pub include: Option<String>,
    pub include_categories: Vec<String>,
    pub exclude: Option<String>,
    pub exclude_categories: Vec<String>,
}

impl PasswordRequest {
    pub fn resolution(&self) -> Result<ResolutionRequest> {
        Ok(ResolutionRequest {
            include_chars: self.include.iter().flat_map(|s| s.chars()).collect(),
            include_categories: parse_categories(&self.include_categories)?,
            exclude_chars: self.exclude.iter().flat_map(|s| s.chars()).collect(),
            exclude_categories: parse_categories(&self.exclude_categories)?,
        })
    }
}

/// Draws `length` characters independently from the resolved alphabet.
/// Characters may repeat.
pub fn generate_password(
    rng: &mut impl RandomSource,
    request: &PasswordRequest,
    table: &CharTable,
) -> Result<String> {
    let alphabet: Vec<char> = request.resolution()?.resolve(table)?.into_iter().collect();
    if alphabet.is_empty() {
        return Err(RandError::EmptyAlphabet);
    }

    (0..request.length)
        .map(|_| rng.choice(&alphabet).copied())
        .collect()
}
