//! Rank-weighted parent selection.
//!
//! The pool is the multiset in which the chromosome at sorted position `p`
//! appears exactly `p` times. The worst chromosome (position 0) never appears,
//! the best one (position `N - 1`) appears `N - 1` times, for a total of
//! `N(N - 1) / 2` slots. Parents are drawn uniformly from the slots with
//! replacement, so the chance of being picked grows linearly with rank and
//! ignores the magnitude of the fitness scores.
//!
//! The multiset is never materialized: a slot index is mapped back to its rank
//! through the triangular numbers that delimit each rank's run of copies.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Number of slots in the selection pool of a population of `population_size`.
pub fn pool_size(population_size: usize) -> usize {
    population_size * population_size.saturating_sub(1) / 2
}

/// First slot occupied by `rank`: the triangular number `rank(rank - 1) / 2`.
fn first_slot_of(rank: usize) -> usize {
    rank * rank.saturating_sub(1) / 2
}

/// A weighted sampling pool over a population sorted ascending by fitness.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPool<'a, T> {
    sorted: &'a [T],
    size: usize,
}

impl<'a, T> SelectionPool<'a, T> {
    /// Builds the pool for a population already sorted worst first, best last.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPool` when the population holds fewer than
    /// two chromosomes, since the pool would have no slots to draw from.
    pub fn new(sorted_population: &'a [T]) -> Result<Self> {
        let size = pool_size(sorted_population.len());
        if size == 0 {
            return Err(GeneticError::EmptyPool {
                population_size: sorted_population.len(),
            });
        }

        Ok(Self {
            sorted: sorted_population,
            size,
        })
    }

    /// Total number of slots, `N(N - 1) / 2`.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always `false`: an empty pool cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots held by the chromosome at `rank`.
    pub fn copies_of(&self, rank: usize) -> usize {
        if rank < self.sorted.len() {
            rank
        } else {
            0
        }
    }

    /// Probability that a single draw returns the chromosome at `rank`.
    pub fn probability_of(&self, rank: usize) -> f64 {
        self.copies_of(rank) as f64 / self.size as f64
    }

    /// Maps a slot index in `0..len()` to the rank that occupies it.
    pub fn rank_at(&self, slot: usize) -> usize {
        debug_assert!(slot < self.size);

        // Initial guess from the inverse of the triangular numbers, then
        // corrected for floating point drift.
        let mut rank = ((1.0 + (1.0 + 8.0 * slot as f64).sqrt()) / 2.0) as usize;
        while rank > 1 && first_slot_of(rank) > slot {
            rank -= 1;
        }
        while first_slot_of(rank + 1) <= slot {
            rank += 1;
        }
        rank
    }

    /// Draws one chromosome uniformly from the pool slots.
    pub fn draw(&self, rng: &mut RandomNumberGenerator) -> &'a T {
        let slot = rng.gen_range(0..self.size);
        &self.sorted[self.rank_at(slot)]
    }

    /// Draws two parents independently, with replacement.
    ///
    /// Both draws may land on the same chromosome.
    pub fn draw_pair(&self, rng: &mut RandomNumberGenerator) -> (&'a T, &'a T) {
        (self.draw(rng), self.draw(rng))
    }
}
