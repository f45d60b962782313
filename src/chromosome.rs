//! # ChromosomeProvider Trait
//!
//! The `ChromosomeProvider` trait is the contract between the search engine and
//! a problem domain. A provider owns the genome representation and supplies the
//! five operations the engine drives: seeding, evaluation, crossover, mutation
//! and the validity predicate. The engine never looks inside a chromosome.
//!
//! ## Example
//!
//! ```rust
//! use rank_ga::chromosome::ChromosomeProvider;
//! use rank_ga::error::Result;
//! use rank_ga::rng::RandomNumberGenerator;
//! use rank_ga::search::SearchOptions;
//!
//! /// Searches for the integer in `0..=100` closest to 42.
//! struct Closest;
//!
//! impl ChromosomeProvider for Closest {
//!     type Chromosome = i64;
//!
//!     fn generate_initial_population(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<i64>> {
//!         Ok((0..8).map(|_| rng.gen_range(0..=100)).collect())
//!     }
//!
//!     fn evaluate(&self, chromosome: &i64) -> f64 {
//!         // Minimizing the distance, so the score is negated.
//!         -((chromosome - 42).abs() as f64)
//!     }
//!
//!     fn crossover(
//!         &self,
//!         parent1: &i64,
//!         parent2: &i64,
//!         _options: &SearchOptions,
//!         _rng: &mut RandomNumberGenerator,
//!     ) -> Result<i64> {
//!         Ok((parent1 + parent2) / 2)
//!     }
//!
//!     fn mutate(
//!         &self,
//!         chromosome: i64,
//!         options: &SearchOptions,
//!         rng: &mut RandomNumberGenerator,
//!     ) -> Result<i64> {
//!         if rng.percent_chance(options.get_mutation_rate()) {
//!             return Ok(chromosome + rng.gen_range(-3..=3));
//!         }
//!         Ok(chromosome)
//!     }
//!
//!     fn is_invalid(&self, chromosome: &i64) -> bool {
//!         !(0..=100).contains(chromosome)
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::{error::Result, rng::RandomNumberGenerator, search::SearchOptions};

/// Supplies the genome representation and genetic operators of one problem domain.
///
/// Higher fitness is always better for the engine. Providers that minimize an
/// objective must negate or otherwise invert their score in [`evaluate`].
///
/// [`evaluate`]: ChromosomeProvider::evaluate
pub trait ChromosomeProvider {
    /// One candidate solution.
    type Chromosome: Clone + Debug;

    /// Creates the first generation.
    ///
    /// The length of the returned population fixes the population size for
    /// the whole run and must be at least 2.
    fn generate_initial_population(
        &self,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Self::Chromosome>>;

    /// Scores a chromosome. Higher is better; NaN is rejected by the engine.
    fn evaluate(&self, chromosome: &Self::Chromosome) -> f64;

    /// Produces one offspring from two parents.
    ///
    /// `options.get_crossover_rate()` is a hint the provider may consult.
    /// Any repair needed to keep the offspring well-formed is the provider's job;
    /// a repair that cannot be performed should be reported as
    /// [`GeneticError::Provider`](crate::error::GeneticError::Provider).
    fn crossover(
        &self,
        parent1: &Self::Chromosome,
        parent2: &Self::Chromosome,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self::Chromosome>;

    /// Stochastically perturbs a chromosome.
    ///
    /// `options.get_mutation_rate()` is a hint the provider may consult at
    /// whatever granularity suits its genome (per gene, per chromosome).
    fn mutate(
        &self,
        chromosome: Self::Chromosome,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self::Chromosome>;

    /// Returns `true` if the candidate violates a constraint and must be discarded.
    fn is_invalid(&self, chromosome: &Self::Chromosome) -> bool;
}
