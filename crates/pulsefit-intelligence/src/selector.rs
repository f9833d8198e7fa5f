// ABOUTME: Pool selection with exclusion of recently used pools
// ABOUTME: Entropy is injectable so tests can replay selections deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pool Selector
//!
//! Picks one pool out of a candidate list, avoiding the indices the caller
//! used recently. When every index is excluded the exclusion set is ignored so
//! a selection is always produced for a non-empty list.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use pulsefit_core::models::TaskPool;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of raw random values for pool selection
pub trait EntropySource {
    /// Next raw value
    fn draw(&mut self) -> u64;
}

impl<E: EntropySource + ?Sized> EntropySource for Box<E> {
    fn draw(&mut self) -> u64 {
        (**self).draw()
    }
}

/// Production entropy: thread-local PRNG output XOR the wall clock's nanoseconds
#[derive(Debug, Default, Clone, Copy)]
pub struct MixedEntropy;

impl MixedEntropy {
    /// Create the production entropy source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn clock_nanos() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    }
}

impl EntropySource for MixedEntropy {
    fn draw(&mut self) -> u64 {
        rand::thread_rng().gen::<u64>() ^ Self::clock_nanos()
    }
}

/// Reproducible entropy from a seeded `ChaCha8` generator
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    rng: ChaCha8Rng,
}

impl SeededEntropy {
    /// Generator seeded with `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn draw(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedSequenceEntropy {
    values: Vec<u64>,
    position: usize,
}

impl FixedSequenceEntropy {
    /// Source replaying `values`; an empty list always yields 0
    #[must_use]
    pub const fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl EntropySource for FixedSequenceEntropy {
    fn draw(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position = self.position.wrapping_add(1);
        value
    }
}

/// A chosen pool and its position in the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSelection<'a> {
    /// Index into the candidate list
    pub index: usize,
    /// The selected pool
    pub pool: &'a TaskPool,
}

/// Chooses pools using an injected entropy source
#[derive(Debug, Clone)]
pub struct PoolSelector<E: EntropySource> {
    entropy: E,
}

impl Default for PoolSelector<MixedEntropy> {
    fn default() -> Self {
        Self::new(MixedEntropy::new())
    }
}

impl<E: EntropySource> PoolSelector<E> {
    /// Selector drawing from `entropy`
    #[must_use]
    pub const fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Select a pool, preferring indices not in `exclude`
    ///
    /// Returns `None` only when `pools` is empty. Exclusions outside the list
    /// are ignored; if every index is excluded the full range is used.
    pub fn select<'a>(
        &mut self,
        pools: &'a [TaskPool],
        exclude: &HashSet<usize>,
    ) -> Option<PoolSelection<'a>> {
        let index = self.select_index(pools.len(), exclude)?;
        Some(PoolSelection {
            index,
            pool: &pools[index],
        })
    }

    /// Index form of [`Self::select`] for a list of `count` pools
    pub fn select_index(&mut self, count: usize, exclude: &HashSet<usize>) -> Option<usize> {
        if count == 0 {
            return None;
        }

        let mut candidates: Vec<usize> = (0..count).filter(|i| !exclude.contains(i)).collect();
        let relaxed = candidates.is_empty();
        if relaxed {
            candidates = (0..count).collect();
        }

        let slot = (self.entropy.draw() % candidates.len() as u64) as usize;
        let index = candidates[slot];
        debug!(
            count,
            excluded = exclude.len(),
            relaxed,
            index,
            "Selected task pool"
        );
        Some(index)
    }
}
