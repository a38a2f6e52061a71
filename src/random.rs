//! Secure randomness.
//!
//! Everything random in `randtxt` goes through [`RandomSource`]. The only
//! production implementation, [`OsRandom`], reads each word straight from
//! the operating system entropy source; the provided methods turn those
//! words into uniform integers, choices and shuffles without modulo bias.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::errors::{RandError, Result};

pub trait RandomSource {
    /// Next uniformly distributed 64-bit word.
    fn next_u64(&mut self) -> Result<u64>;

    /// Uniform value in `[0, bound)`.
    ///
    /// Widening-multiply rejection: the product's high word is the result,
    /// and products whose low word falls in the short zone below
    /// `2^64 mod bound` are redrawn so every residue is equally likely.
    fn below(&mut self, bound: u64) -> Result<u64> {
        if bound == 0 {
            return Err(RandError::EmptyRange);
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let wide = u128::from(self.next_u64()?) * u128::from(bound);
            if wide as u64 >= threshold {
                return Ok((wide >> 64) as u64);
            }
        }
    }

    fn uniform_int(&mut self, n: usize) -> Result<usize> {
        Ok(self.below(n as u64)? as usize)
    }

    /// Uniform value in `[min, max]`, both ends inclusive.
    fn uniform_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if max < min {
            return Err(RandError::InvalidRange { min, max });
        }
        let span = max.abs_diff(min);
        let offset = if span == u64::MAX {
            self.next_u64()?
        } else {
            self.below(span + 1)?
        };
        Ok(min.wrapping_add_unsigned(offset))
    }

    fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let index = self.uniform_int(items.len())?;
        Ok(&items[index])
    }

    /// Fisher-Yates, in place.
    fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

/// Randomness backed by the operating system CSPRNG.
#[derive(Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u64(&mut self) -> Result<u64> {
        OsRng
            .try_next_u64()
            .map_err(|e| RandError::Entropy(e.to_string()))
    }
}
