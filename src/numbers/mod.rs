//! Random number sets shown in the grid
//!
//! A [`NumberSet`] is a non-empty sequence of values in
//! `1..=`[`MAX_VALUE`]. Every freshly generated set contains at least one value
//! at or below [`SMALL_THRESHOLD`], so the grid always has a cell that can be
//! clicked to regenerate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::num::NonZeroUsize;
use std::ops::Index;

/// Largest value the generator draws
pub const MAX_VALUE: u32 = 1000;

/// Values at or below this act as "regenerate" buttons
pub const SMALL_THRESHOLD: u32 = 30;

/// Ordered, fixed-length sequence of positive integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSet {
    values: Vec<u32>,
}

impl NumberSet {
    /// Wrap existing values. Returns `None` for an empty vector.
    pub fn from_values(values: Vec<u32>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(NumberSet { values })
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Whether any value would act as a regenerate trigger
    pub fn has_small_value(&self) -> bool {
        self.values.iter().any(|&v| v <= SMALL_THRESHOLD)
    }
}

impl Index<usize> for NumberSet {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.values[index]
    }
}

/// Draws number sets from a random source
#[derive(Debug)]
pub struct NumberGenerator<R = StdRng> {
    rng: R,
}

impl NumberGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        NumberGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator; the same seed yields the same sets
    pub fn from_seed(seed: u64) -> Self {
        NumberGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> NumberGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        NumberGenerator { rng }
    }

    /// Draw `count` values in `1..=MAX_VALUE`.
    ///
    /// If none of them is at or below [`SMALL_THRESHOLD`], one randomly chosen
    /// position is overwritten with a value in `1..=SMALL_THRESHOLD`.
    pub fn generate(&mut self, count: NonZeroUsize) -> NumberSet {
        let count = count.get();
        let mut values: Vec<u32> = (0..count)
            .map(|_| self.rng.gen_range(1..=MAX_VALUE))
            .collect();

        if !values.iter().any(|&v| v <= SMALL_THRESHOLD) {
            let slot = self.rng.gen_range(0..count);
            values[slot] = self.rng.gen_range(1..=SMALL_THRESHOLD);
        }

        NumberSet { values }
    }
}
