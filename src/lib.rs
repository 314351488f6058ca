//! Budget-aware genetic algorithm with priority-driven lazy fitness
//! evaluation.
//!
//! Classic generational GAs re-evaluate the whole population every epoch.
//! When the objective function dominates the cost of a run, most of those
//! calls are wasted on individuals whose fitness a cheap estimate already
//! predicts well. This crate evaluates only a fraction of the outdated
//! individuals per epoch — the ones whose fitness is most uncertain, by a
//! scheduling priority fed from crossover disagreement, mutation, and
//! skip aging — and anneals that fraction toward full evaluation as the
//! run progresses.
//!
//! # Building blocks
//!
//! - [`Chromosome`]: a candidate solution (bounded real vector or integer
//!   permutation) plus fitness, outdated flag, and scheduling priority
//! - [`Generation`]: the fixed-size population with derived statistics
//! - [`Selection`]: tournament or roulette-wheel parent selection
//! - [`FitnessFunction`]: the objective contract; [`benchmarks`] has
//!   stock implementations
//! - [`EvolutionEngine`]: epoch orchestration and the lazy scheduler
//!
//! # Example
//!
//! ```
//! use lazyga::benchmarks::Sphere;
//! use lazyga::{Chromosome, EngineConfig, EvolutionEngine, Generation, RealCrossover};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let blueprint = Chromosome::real_vector(10, -4.0, 4.0, 0.5, RealCrossover::OnePoint, &mut rng);
//! let first_generation = Generation::spawn(100, &blueprint, &mut rng);
//!
//! let config = EngineConfig::default()
//!     .with_initial_evaluation_rate(0.2)
//!     .with_max_evaluations(100_000)
//!     .with_seed(7);
//! let mut engine = EvolutionEngine::new(config, first_generation, Sphere).unwrap();
//!
//! // The stopping condition is the caller's: fitness target or budget.
//! for _ in 0..50 {
//!     engine.run_epoch().unwrap();
//!     if engine.generation().min_fitness() < 1e-4 {
//!         break;
//!     }
//! }
//! assert!(engine.total_evaluations() <= 100_000);
//! ```

pub mod benchmarks;
mod chromosome;
mod config;
mod engine;
mod error;
mod fitness;
mod generation;
mod selection;

pub use chromosome::{Chromosome, Genes, Permutation, RealCrossover, RealVector};
pub use config::{Elitism, EngineConfig};
pub use engine::EvolutionEngine;
pub use error::{Error, Result};
pub use fitness::FitnessFunction;
pub use generation::Generation;
pub use selection::Selection;
