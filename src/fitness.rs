//! Objective function contract.

use crate::chromosome::Chromosome;

/// Maps a chromosome to a scalar objective value.
///
/// This is the expensive operation the lazy scheduler exists to ration:
/// the engine calls it synchronously, but only for the chromosomes the
/// scheduler picks each epoch. Implementations must accept any chromosome
/// of the configured encoding and shape, may be stochastic or
/// deterministic, and must be safe to call repeatedly.
///
/// Lower values are better for the engine's elitism ordering; use
/// maximization-oriented fitness only together with a maximizing
/// selection strategy.
pub trait FitnessFunction {
    /// Computes the fitness of a chromosome.
    fn evaluate(&self, chromosome: &Chromosome) -> f64;
}
