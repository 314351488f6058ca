//! Error types for the engine and its operators.

use thiserror::Error;

/// Errors raised by configuration validation, selection, and crossover.
///
/// None of these are recovered internally; every one is fatal to the
/// operation that raised it and propagates to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The population size must be even so offspring pairs fill it cleanly.
    #[error("population size must be even, got {size}")]
    OddPopulation { size: usize },

    /// The resolved elitism count must be even for the same reason.
    #[error("elitism count must be even, got {count}")]
    OddElitism { count: usize },

    /// Elites may not fill (or exceed) the whole population.
    #[error("elitism count {count} must be smaller than population size {size}")]
    ElitismExceedsPopulation { count: usize, size: usize },

    /// A probability or rate parameter fell outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    /// Crossover partners must share the same encoding length.
    #[error("crossover parents must have the same length: {left} vs {right}")]
    IncompatibleParents { left: usize, right: usize },

    /// Crossover partners must share the same encoding variant.
    #[error("crossover parents must use the same encoding")]
    EncodingMismatch,

    /// Tournament rate × population size yielded zero candidates.
    #[error("tournament size is zero; tournament rate x population size must be at least 1")]
    EmptyTournament,

    /// Roulette-wheel selection needs a strictly positive fitness total.
    #[error("roulette-wheel selection requires a strictly positive fitness total, got {total}")]
    NonPositiveFitness { total: f64 },

    /// Operations on an empty generation are undefined.
    #[error("generation must not be empty")]
    EmptyGeneration,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
