//! Offspring production and the constraint filter.
//!
//! One offspring is always `mutate(crossover(parent1, parent2))`. The filter
//! discards offspring the provider reports as invalid and starts over with a
//! freshly drawn pair of parents, up to the configured number of attempts.

use tracing::trace;

use super::{options::SearchOptions, selection::SelectionPool};
use crate::{
    chromosome::ChromosomeProvider,
    error::{ContractViolation, Result},
    rng::RandomNumberGenerator,
};

/// Applies the provider's operators in crossover-then-mutation order.
#[derive(Debug)]
pub struct Reproduction<'a, P> {
    provider: &'a P,
    options: &'a SearchOptions,
}

impl<'a, P> Reproduction<'a, P>
where
    P: ChromosomeProvider,
{
    pub fn new(provider: &'a P, options: &'a SearchOptions) -> Self {
        Self { provider, options }
    }

    /// Produces one candidate offspring without checking its validity.
    ///
    /// Provider errors propagate unchanged.
    pub fn offspring(
        &self,
        parent1: &P::Chromosome,
        parent2: &P::Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<P::Chromosome> {
        let child = self
            .provider
            .crossover(parent1, parent2, self.options, rng)?;
        self.provider.mutate(child, self.options, rng)
    }

    /// Draws parents from `pool` and reproduces until the provider accepts the child.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation::ConstraintUnsatisfiable` once
    /// `max_attempts_per_offspring` consecutive children have been rejected.
    /// Without a cap this loops for as long as the provider keeps rejecting.
    pub fn valid_offspring(
        &self,
        pool: &SelectionPool<'_, P::Chromosome>,
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<P::Chromosome> {
        let max_attempts = self.options.get_max_attempts_per_offspring();
        let mut attempts = 0usize;

        loop {
            let (parent1, parent2) = pool.draw_pair(rng);
            let child = self.offspring(parent1, parent2, rng)?;
            attempts += 1;

            if !self.provider.is_invalid(&child) {
                return Ok(child);
            }

            trace!(generation, attempts, "offspring rejected by constraint filter");

            if max_attempts.is_some_and(|max| attempts >= max) {
                return Err(ContractViolation::ConstraintUnsatisfiable {
                    attempts,
                    generation,
                }
                .into());
            }
        }
    }
}
