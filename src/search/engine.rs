//! # GeneticAlgorithmSearch
//!
//! The generation loop. Each generation is sorted ascending by fitness, its last
//! element is recorded as the best so far, and a new population of the same
//! size is bred from the rank-weighted selection pool. With `keep_best` the
//! recorded best is carried into the next population unchanged.
//!
//! The loop always runs for exactly `num_generations` generations; there is no
//! early stop on fitness or stagnation.
//!
//! ## Example
//!
//! ```rust
//! use rank_ga::chromosome::ChromosomeProvider;
//! use rank_ga::error::Result;
//! use rank_ga::rng::RandomNumberGenerator;
//! use rank_ga::search::{GeneticAlgorithmSearch, SearchOptions};
//!
//! struct MaxByte;
//!
//! impl ChromosomeProvider for MaxByte {
//!     type Chromosome = u8;
//!
//!     fn generate_initial_population(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<u8>> {
//!         Ok((0..6).map(|_| rng.gen_range(0..=255)).collect())
//!     }
//!
//!     fn evaluate(&self, chromosome: &u8) -> f64 {
//!         *chromosome as f64
//!     }
//!
//!     fn crossover(&self, a: &u8, b: &u8, _: &SearchOptions, _: &mut RandomNumberGenerator) -> Result<u8> {
//!         Ok(a | b)
//!     }
//!
//!     fn mutate(&self, c: u8, o: &SearchOptions, rng: &mut RandomNumberGenerator) -> Result<u8> {
//!         let mut c = c;
//!         for bit in 0..8 {
//!             if rng.percent_chance(o.get_mutation_rate()) {
//!                 c ^= 1 << bit;
//!             }
//!         }
//!         Ok(c)
//!     }
//!
//!     fn is_invalid(&self, _: &u8) -> bool {
//!         false
//!     }
//! }
//!
//! let options = SearchOptions::builder().num_generations(20).build()?;
//! let mut search = GeneticAlgorithmSearch::new(MaxByte, options, RandomNumberGenerator::from_seed(3))?;
//! search.run_search()?;
//!
//! let best = search.get_result()?;
//! assert!(*best > 0);
//! # Ok::<(), rank_ga::error::GeneticError>(())
//! ```

use std::fmt;

use tracing::{debug, info, instrument};

use super::{
    observer::{GenerationReport, NoopObserver, SearchObserver},
    options::{LogLevel, SearchOptions},
    reproduction::Reproduction,
    selection::SelectionPool,
};
use crate::{
    chromosome::ChromosomeProvider,
    error::{ContractViolation, GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
};

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No population yet, or the last run failed.
    Uninitialized,
    /// The initial population has been generated.
    Ready,
    /// Sorting the current generation and recording its best.
    Evaluating,
    /// Breeding the next generation.
    Reproducing,
    /// All generations have run.
    Terminated,
}

/// The best chromosome of a search together with its fitness score.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<T> {
    pub chromosome: T,
    pub score: f64,
}

/// Evolves the population of a [`ChromosomeProvider`] for a fixed number of generations.
///
/// The instance exclusively owns its population and random source. Independent
/// searches can run in parallel as long as each has its own instance.
pub struct GeneticAlgorithmSearch<P>
where
    P: ChromosomeProvider,
{
    provider: P,
    options: SearchOptions,
    rng: RandomNumberGenerator,
    state: SearchState,
    population: Vec<P::Chromosome>,
    population_size: usize,
    best_so_far: Option<EvolutionResult<P::Chromosome>>,
    generation: usize,
    fitness_history: Vec<f64>,
}

impl<P> GeneticAlgorithmSearch<P>
where
    P: ChromosomeProvider,
{
    /// Creates a search over `provider` driven by `rng`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `options` fail validation.
    pub fn new(provider: P, options: SearchOptions, rng: RandomNumberGenerator) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            provider,
            options,
            rng,
            state: SearchState::Uninitialized,
            population: Vec::new(),
            population_size: 0,
            best_so_far: None,
            generation: 0,
            fitness_history: Vec::new(),
        })
    }

    /// Creates a search with a random source seeded from system entropy.
    pub fn with_entropy(provider: P, options: SearchOptions) -> Result<Self> {
        Self::new(provider, options, RandomNumberGenerator::new())
    }

    /// Runs the search from a fresh initial population.
    ///
    /// See [`run_search_with`](Self::run_search_with).
    pub fn run_search(&mut self) -> Result<()> {
        self.run_search_with(&mut NoopObserver)
    }

    /// Runs the search, reporting every evaluated generation to `observer`.
    ///
    /// Calling it again discards the previous run and starts over.
    ///
    /// # Errors
    ///
    /// - `GeneticError::Configuration` if the initial population holds fewer
    ///   than two chromosomes.
    /// - `GeneticError::ProviderContract` if the constraint filter exhausts its
    ///   attempts or the evaluator returns NaN.
    /// - Any error raised by the provider's operators, unchanged.
    ///
    /// On error the search returns to [`SearchState::Uninitialized`] and no
    /// result is kept.
    #[instrument(
        level = "info",
        skip(self, observer),
        fields(
            num_generations = self.options.get_num_generations(),
            keep_best = self.options.get_keep_best()
        )
    )]
    pub fn run_search_with<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: SearchObserver<P::Chromosome>,
    {
        let outcome = self.run_generations(observer);
        if outcome.is_err() {
            self.reset();
        }
        outcome
    }

    fn run_generations<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: SearchObserver<P::Chromosome>,
    {
        self.seed()?;

        while self.generation < self.options.get_num_generations() {
            self.evaluate_generation()?;

            let best = self
                .best_so_far
                .as_ref()
                .ok_or_else_genetic(|| GeneticError::NotRun)?;
            self.report_progress(best);
            observer.on_generation(&GenerationReport {
                generation: self.generation,
                population: &self.population,
                best: &best.chromosome,
                best_score: best.score,
            });

            self.state = SearchState::Reproducing;
            let next = self.next_population()?;
            if next.len() != self.population_size {
                return Err(ContractViolation::PopulationSizeChanged {
                    expected: self.population_size,
                    actual: next.len(),
                }
                .into());
            }
            self.population = next;
            self.generation += 1;
        }

        self.state = SearchState::Terminated;
        debug!(generations = self.generation, "search terminated");
        Ok(())
    }

    fn reset(&mut self) {
        self.state = SearchState::Uninitialized;
        self.population.clear();
        self.population_size = 0;
        self.best_so_far = None;
        self.generation = 0;
        self.fitness_history.clear();
    }

    /// Generates the initial population and fixes the population size.
    fn seed(&mut self) -> Result<()> {
        self.reset();

        let population = self.provider.generate_initial_population(&mut self.rng)?;
        if population.len() < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, the provider generated {}",
                population.len()
            )));
        }

        info!(population_size = population.len(), "initial population generated");
        self.population_size = population.len();
        self.population = population;
        self.state = SearchState::Ready;
        Ok(())
    }

    /// Sorts the population ascending by fitness and records its last element as the best.
    fn evaluate_generation(&mut self) -> Result<()> {
        self.state = SearchState::Evaluating;

        let mut scored = Vec::with_capacity(self.population.len());
        for chromosome in self.population.drain(..) {
            let score = self.provider.evaluate(&chromosome);
            if score.is_nan() {
                return Err(ContractViolation::NonFiniteFitness.into());
            }
            scored.push((score, chromosome));
        }

        // Stable, so equal scores keep their relative order
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (best_score, best) = scored
            .last()
            .map(|(score, chromosome)| (*score, chromosome.clone()))
            .ok_or_else_genetic(|| GeneticError::EmptyPool {
                population_size: 0,
            })?;

        self.population = scored.into_iter().map(|(_, chromosome)| chromosome).collect();
        self.best_so_far = Some(EvolutionResult {
            chromosome: best,
            score: best_score,
        });
        self.fitness_history.push(best_score);
        Ok(())
    }

    /// Breeds a full population from the current, sorted one.
    fn next_population(&mut self) -> Result<Vec<P::Chromosome>> {
        let mut next = Vec::with_capacity(self.population_size);

        if self.options.get_keep_best() {
            if let Some(best) = &self.best_so_far {
                next.push(best.chromosome.clone());
            }
        }

        let pool = SelectionPool::new(&self.population)?;
        let reproduction = Reproduction::new(&self.provider, &self.options);
        while next.len() < self.population_size {
            next.push(reproduction.valid_offspring(&pool, self.generation, &mut self.rng)?);
        }

        Ok(next)
    }

    fn report_progress(&self, best: &EvolutionResult<P::Chromosome>) {
        let is_last = self.generation + 1 == self.options.get_num_generations();
        if self.generation % self.options.progress_stride() != 0 && !is_last {
            return;
        }

        match self.options.get_log_level() {
            LogLevel::Minimal => {
                info!(generation = self.generation, best_score = best.score, "generation evaluated")
            }
            LogLevel::Verbose => info!(
                generation = self.generation,
                best_score = best.score,
                best = ?best.chromosome,
                "generation evaluated"
            ),
            LogLevel::None => {}
        }
    }

    /// Returns the best chromosome of the last evaluated generation.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::NotRun` if no generation has been evaluated yet.
    pub fn get_result(&self) -> Result<&P::Chromosome> {
        self.best_so_far
            .as_ref()
            .map(|best| &best.chromosome)
            .ok_or_else_genetic(|| GeneticError::NotRun)
    }

    /// Returns the best chromosome of the last evaluated generation with its score.
    pub fn get_result_with_score(&self) -> Result<EvolutionResult<P::Chromosome>> {
        self.best_so_far
            .clone()
            .ok_or_else_genetic(|| GeneticError::NotRun)
    }

    /// Best score of every evaluated generation, oldest first.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Number of completed evaluate-and-reproduce cycles.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The current population. After a run this is the last bred generation,
    /// which has not been evaluated.
    pub fn population(&self) -> &[P::Chromosome] {
        &self.population
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> fmt::Debug for GeneticAlgorithmSearch<P>
where
    P: ChromosomeProvider,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneticAlgorithmSearch")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("population_size", &self.population_size)
            .field("best_so_far", &self.best_so_far)
            .finish_non_exhaustive()
    }
}
