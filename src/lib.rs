pub mod chromosome;
pub mod error;
pub mod rng;
pub mod search;

// Re-export commonly used types for convenience
pub use chromosome::ChromosomeProvider;
pub use error::{ContractViolation, GeneticError, OptionExt, Result, ResultExt};
pub use search::{GeneticAlgorithmSearch, SearchOptions};
