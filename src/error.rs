//! # Error Types
//!
//! This module defines the error types of the search engine. Every failure is
//! surfaced synchronously from the call that triggered it; the engine never
//! retries or salvages a partial result after an error.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use rank_ga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use rank_ga::error::{GeneticError, OptionExt};
//!
//! fn best_of(candidates: &[i32]) -> rank_ga::error::Result<i32> {
//!     candidates.iter().max().cloned().ok_or_else_genetic(|| GeneticError::NotRun)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// The engine configuration is invalid; the run never starts.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The rank-weighted selection pool has no entries to draw from.
    #[error("Empty pool error: a population of {population_size} cannot produce a selection pool")]
    EmptyPool { population_size: usize },

    /// A chromosome provider broke its contract with the engine.
    #[error("Provider contract error: {0}")]
    ProviderContract(#[from] ContractViolation),

    /// A result was requested before any generation completed.
    #[error("No result available: the search has not completed a generation")]
    NotRun,

    /// A domain error raised by a chromosome provider.
    #[error("Provider error: {0}")]
    Provider(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// The ways a chromosome provider can violate the engine's expectations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractViolation {
    /// The constraint filter rejected every offspring up to the retry cap.
    #[error(
        "constraint filter rejected {attempts} consecutive offspring in generation {generation}"
    )]
    ConstraintUnsatisfiable { attempts: usize, generation: usize },

    /// A rebuilt population does not match the size fixed by the initial one.
    #[error("population size changed from {expected} to {actual}")]
    PopulationSizeChanged { expected: usize, actual: usize },

    /// The fitness evaluator produced NaN.
    #[error("fitness evaluation returned NaN")]
    NonFiniteFitness,
}

/// A specialized Result type for search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use rank_ga::error::ResultExt;
///
/// fn parse_budget(raw: &str) -> rank_ga::error::Result<u32> {
///     raw.parse::<u32>().context("Failed to parse budget")
/// }
///
/// assert!(parse_budget("60000").is_ok());
/// assert!(parse_budget("sixty").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Converts the error to a `GeneticError::Provider` prefixed with `context`.
    ///
    /// Providers use this to surface failures of their own collaborators
    /// as domain errors.
    fn provider_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }

    fn provider_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Provider(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

impl GeneticError {
    /// Returns `true` if this error reports a provider contract violation.
    pub fn is_provider_contract(&self) -> bool {
        matches!(self, GeneticError::ProviderContract(_))
    }
}
