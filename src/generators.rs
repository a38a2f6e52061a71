use tracing::debug;

use crate::colors::COLORS;
use crate::errors::{RandError, Result};
use crate::random::RandomSource;
use crate::words::WordLists;

pub fn generate_number(rng: &mut impl RandomSource, min: i64, max: i64) -> Result<i64> {
    rng.uniform_range(min, max)
}

/// `count` adjective+noun pairs, joined without a separator. Names are
/// drawn lazily so the caller can write them out one at a time.
pub fn generate_names<'a, R: RandomSource>(
    rng: &'a mut R,
    words: &'a WordLists,
    count: usize,
) -> impl Iterator<Item = Result<String>> + 'a {
    (0..count).map(move |_| -> Result<String> {
        let adjective = rng.choice(&words.adjectives)?;
        let noun = rng.choice(&words.nouns)?;
        Ok(format!("{adjective}{noun}"))
    })
}

pub fn generate_color(rng: &mut impl RandomSource) -> Result<&'static str> {
    rng.choice(COLORS).copied()
}

pub fn choose<'a>(rng: &mut impl RandomSource, items: &'a [String]) -> Result<&'a str> {
    rng.choice(items).map(String::as_str)
}

/// `count` distinct items in the order they were drawn.
///
/// Each draw is uniform over the whole list and is kept only if that value
/// has not been picked yet. The bound is the number of distinct values; with
/// `allow_all` unset the count must stay strictly below it.
pub fn choose_multiple<'a>(
    rng: &mut impl RandomSource,
    items: &'a [String],
    count: usize,
    allow_all: bool,
) -> Result<Vec<&'a str>> {
    let mut distinct: Vec<&str> = items.iter().map(String::as_str).collect();
    distinct.sort_unstable();
    distinct.dedup();
    let available = distinct.len();

    if count > available {
        return Err(RandError::TooManyChoices { count, available });
    }
    if !allow_all && count == available {
        return Err(RandError::ChoicesNotFewer { count, available });
    }

    let mut chosen: Vec<&str> = Vec::with_capacity(count);
    let mut rejected = 0usize;
    while chosen.len() < count {
        let pick = rng.choice(items)?.as_str();
        if chosen.contains(&pick) {
            rejected += 1;
        } else {
            chosen.push(pick);
        }
    }
    debug!(count, rejected, "drew distinct choices");
    Ok(chosen)
}

pub fn shuffle_items(rng: &mut impl RandomSource, mut items: Vec<String>) -> Result<Vec<String>> {
    rng.shuffle(&mut items)?;
    Ok(items)
}
