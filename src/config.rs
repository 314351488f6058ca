//! Engine configuration.

use crate::error::{Error, Result};
use crate::selection::Selection;

/// How many of the best individuals are copied verbatim each epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elitism {
    /// An absolute number of individuals.
    Count(usize),
    /// A fraction of the population; the count is `floor(len × rate)`.
    Rate(f64),
}

impl Elitism {
    /// Resolves to an individual count for the given population size.
    pub fn resolve(&self, population_size: usize) -> usize {
        match *self {
            Elitism::Count(count) => count,
            Elitism::Rate(rate) => (population_size as f64 * rate) as usize,
        }
    }
}

/// Parameters controlling the evolutionary loop and the lazy scheduler.
///
/// # Builder pattern
///
/// ```
/// use lazyga::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_crossover_rate(0.9)
///     .with_elitism_count(4)
///     .with_initial_evaluation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Probability that two selected parents recombine instead of being
    /// cloned into the next generation.
    pub crossover_rate: f64,

    /// Independent per-child probability of in-place mutation.
    pub mutation_rate: f64,

    /// How many best individuals are copied unmodified each epoch.
    /// The resolved count must be even and smaller than the population.
    pub elitism: Elitism,

    /// Priority increment applied to a mutated child.
    pub mutation_weight: f64,

    /// Priority increment applied to an outdated individual the scheduler
    /// skips, aging it toward evaluation in a later epoch.
    pub non_evaluation_weight: f64,

    /// Starting fraction of outdated individuals evaluated per epoch.
    /// Anneals toward 1 as the run progresses.
    pub initial_evaluation_rate: f64,

    /// Hard cap on cumulative real evaluations across the run. The
    /// construction-time evaluation of the initial generation does not
    /// count against it.
    pub max_evaluations: usize,

    /// Strategy used to pick parents during refill.
    pub selection: Selection,

    /// Seed for the engine's own random generator; `None` seeds randomly.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.75,
            mutation_rate: 0.125,
            elitism: Elitism::Count(2),
            mutation_weight: 0.01,
            non_evaluation_weight: 0.001,
            initial_evaluation_rate: 1.0,
            max_evaluations: 100_000,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Preserves the `count` best individuals each epoch.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.elitism = Elitism::Count(count);
        self
    }

    /// Preserves the best `rate` fraction of the population each epoch.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism = Elitism::Rate(rate.clamp(0.0, 1.0));
        self
    }

    /// Sets the priority increment for mutated children.
    pub fn with_mutation_weight(mut self, weight: f64) -> Self {
        self.mutation_weight = weight;
        self
    }

    /// Sets the priority increment for skipped outdated individuals.
    pub fn with_non_evaluation_weight(mut self, weight: f64) -> Self {
        self.non_evaluation_weight = weight;
        self
    }

    /// Sets the starting evaluation rate, clamped to `[0, 1]`.
    pub fn with_initial_evaluation_rate(mut self, rate: f64) -> Self {
        self.initial_evaluation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, max: usize) -> Self {
        self.max_evaluations = max;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the population-independent parameters.
    ///
    /// Engine construction additionally checks the constraints that
    /// depend on the population size (even population, even and
    /// non-exhaustive elitism count).
    pub fn validate(&self) -> Result<()> {
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("initial_evaluation_rate", self.initial_evaluation_rate)?;
        if let Elitism::Rate(rate) = self.elitism {
            check_rate("elitism rate", rate)?;
        }
        if let Selection::Tournament { tournament_rate, .. } = self.selection {
            check_rate("tournament_rate", tournament_rate)?;
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(Error::InvalidRate { name, value });
    }
    Ok(())
}
