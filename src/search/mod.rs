//! # Search
//!
//! The evolutionary search engine: configuration, rank-weighted selection,
//! reproduction with constraint filtering, and the generation loop.
pub mod engine;
pub mod observer;
pub mod options;
pub mod reproduction;
pub mod selection;

pub use engine::{EvolutionResult, GeneticAlgorithmSearch, SearchState};
pub use observer::{GenerationReport, NoopObserver, SearchObserver};
pub use options::{LogLevel, SearchOptions, SearchOptionsBuilder};
pub use reproduction::Reproduction;
pub use selection::SelectionPool;
