//! # SearchOptions
//!
//! The `SearchOptions` struct represents the configuration of a genetic algorithm
//! search. It includes the number of generations, the crossover and mutation rate
//! hints handed to the chromosome provider, elitism, progress reporting and the
//! retry cap of the constraint filter.
//!
//! The population size is not part of the options: it is fixed by the length of
//! the provider's initial population.
//!
//! ## Example
//!
//! ```rust
//! use rank_ga::search::options::{LogLevel, SearchOptions};
//!
//! // Create a new SearchOptions instance with custom parameters
//! let custom_options = SearchOptions::new(200, 60, 5, true, LogLevel::Minimal);
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new SearchOptions instance with default parameters
//! let default_options = SearchOptions::default();
//! assert_eq!(default_options.get_num_generations(), 100);
//! ```
//!
//! ## Enums
//!
//! ### `LogLevel`
//!
//! - `Verbose`: reports the best score and the best chromosome.
//! - `Minimal`: reports the generation index and the best score.
//! - `None`: disables progress reporting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeneticError, Result};

/// Default cap on consecutive constraint-filter rejections for one offspring slot.
pub const DEFAULT_MAX_ATTEMPTS_PER_OFFSPRING: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOptions {
    num_generations: usize,
    /// Percentage in `0..=100`, passed through to the provider's crossover.
    crossover_rate: u8,
    /// Percentage in `0..=100`, passed through to the provider's mutation.
    mutation_rate: u8,
    keep_best: bool,
    log_level: LogLevel,
    /// Percentage of the run between two progress reports, in `1..=100`.
    verbose_print_every: u8,
    /// `None` retries rejected offspring forever.
    max_attempts_per_offspring: Option<usize>,
}

impl SearchOptions {
    pub fn new(
        num_generations: usize,
        crossover_rate: u8,
        mutation_rate: u8,
        keep_best: bool,
        log_level: LogLevel,
    ) -> Self {
        Self {
            num_generations,
            crossover_rate,
            mutation_rate,
            keep_best,
            log_level,
            ..Self::default()
        }
    }

    /// Checks every option against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a rate is above 100, the print
    /// cadence is outside `1..=100`, or the attempt cap is zero.
    pub fn validate(&self) -> Result<()> {
        if self.crossover_rate > 100 {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must be in the range [0, 100], got {}",
                self.crossover_rate
            )));
        }

        if self.mutation_rate > 100 {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be in the range [0, 100], got {}",
                self.mutation_rate
            )));
        }

        if !(1..=100).contains(&self.verbose_print_every) {
            return Err(GeneticError::Configuration(format!(
                "Verbose print cadence must be in the range [1, 100], got {}",
                self.verbose_print_every
            )));
        }

        if self.max_attempts_per_offspring == Some(0) {
            return Err(GeneticError::Configuration(
                "Maximum attempts per offspring cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover_rate(&self) -> u8 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> u8 {
        self.mutation_rate
    }

    pub fn get_keep_best(&self) -> bool {
        self.keep_best
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn is_verbose(&self) -> bool {
        self.log_level != LogLevel::None
    }

    pub fn get_verbose_print_every(&self) -> u8 {
        self.verbose_print_every
    }

    pub fn get_max_attempts_per_offspring(&self) -> Option<usize> {
        self.max_attempts_per_offspring
    }

    /// Number of generations between two progress reports.
    ///
    /// Derived from `verbose_print_every` as a share of `num_generations`,
    /// never less than one.
    pub fn progress_stride(&self) -> usize {
        (self.num_generations * self.verbose_print_every as usize / 100).max(1)
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the crossover rate hint.
    pub fn set_crossover_rate(&mut self, crossover_rate: u8) {
        self.crossover_rate = crossover_rate;
    }

    /// Sets the mutation rate hint.
    pub fn set_mutation_rate(&mut self, mutation_rate: u8) {
        self.mutation_rate = mutation_rate;
    }

    /// Enables or disables elitism.
    pub fn set_keep_best(&mut self, keep_best: bool) {
        self.keep_best = keep_best;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_verbose_print_every(&mut self, verbose_print_every: u8) {
        self.verbose_print_every = verbose_print_every;
    }

    pub fn set_max_attempts_per_offspring(&mut self, max_attempts: Option<usize>) {
        self.max_attempts_per_offspring = max_attempts;
    }

    /// Returns a builder for creating a `SearchOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rank_ga::search::options::{LogLevel, SearchOptions};
    ///
    /// let options = SearchOptions::builder()
    ///     .num_generations(5)
    ///     .crossover_rate(50)
    ///     .mutation_rate(10)
    ///     .keep_best(false)
    ///     .log_level(LogLevel::Minimal)
    ///     .max_attempts_per_offspring(Some(1_000))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(!options.get_keep_best());
    /// ```
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            crossover_rate: 50,
            mutation_rate: 10,
            keep_best: true,
            log_level: LogLevel::None,
            verbose_print_every: 10,
            max_attempts_per_offspring: Some(DEFAULT_MAX_ATTEMPTS_PER_OFFSPRING),
        }
    }
}

/// Builder for `SearchOptions`.
///
/// Provides a fluent interface for constructing validated `SearchOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    num_generations: Option<usize>,
    crossover_rate: Option<u8>,
    mutation_rate: Option<u8>,
    keep_best: Option<bool>,
    log_level: Option<LogLevel>,
    verbose_print_every: Option<u8>,
    max_attempts_per_offspring: Option<Option<usize>>,
}

impl SearchOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: u8) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: u8) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn keep_best(mut self, value: bool) -> Self {
        self.keep_best = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn verbose_print_every(mut self, value: u8) -> Self {
        self.verbose_print_every = Some(value);
        self
    }

    /// Caps consecutive rejections per offspring slot; `None` removes the cap.
    pub fn max_attempts_per_offspring(mut self, value: Option<usize>) -> Self {
        self.max_attempts_per_offspring = Some(value);
        self
    }

    /// Builds and validates the `SearchOptions` instance.
    pub fn build(self) -> Result<SearchOptions> {
        let defaults = SearchOptions::default();
        let options = SearchOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            keep_best: self.keep_best.unwrap_or(defaults.keep_best),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            verbose_print_every: self
                .verbose_print_every
                .unwrap_or(defaults.verbose_print_every),
            max_attempts_per_offspring: self
                .max_attempts_per_offspring
                .unwrap_or(defaults.max_attempts_per_offspring),
        };
        options.validate()?;
        Ok(options)
    }
}
