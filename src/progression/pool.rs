use crate::errors::{ConfigError, ConfigResult};
use rand::Rng;
use schema::PokedexRange;
use std::collections::BTreeSet;

/// Flattened set of Pokedex numbers a range can produce.
///
/// The contiguous range and the extras are merged into one list so every
/// number is equally likely, rather than picking between the range and the
/// extras first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexPool {
    candidates: Vec<u16>,
}

impl PokedexPool {
    /// Build a pool from configuration. `label` names the range in errors.
    pub fn from_range(label: &'static str, range: &PokedexRange) -> ConfigResult<Self> {
        if range.min == 0 {
            return Err(ConfigError::InvalidPokedexNumber {
                range: label,
                number: range.min,
            });
        }
        if let Some(&number) = range.extras.iter().find(|&&number| number == 0) {
            return Err(ConfigError::InvalidPokedexNumber {
                range: label,
                number,
            });
        }

        // min > max leaves the contiguous part empty; extras may still fill it
        let candidates: BTreeSet<u16> = (range.min..=range.max)
            .chain(range.extras.iter().copied())
            .collect();

        if candidates.is_empty() {
            return Err(ConfigError::EmptyPokedexRange {
                range: label,
                min: range.min,
                max: range.max,
            });
        }

        Ok(Self {
            candidates: candidates.into_iter().collect(),
        })
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u16 {
        let index = rng.random_range(0..self.candidates.len());
        self.candidates[index]
    }

    pub fn contains(&self, pokedex_number: u16) -> bool {
        self.candidates.binary_search(&pokedex_number).is_ok()
    }

    /// Every drawable number in ascending order
    pub fn candidates(&self) -> &[u16] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
