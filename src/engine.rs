//! Evolution engine: epoch orchestration and the lazy evaluation scheduler.
//!
//! [`EvolutionEngine`] owns the current generation and advances it one
//! epoch at a time: elitism retention, selection/crossover/mutation to
//! refill the population, then a *partial* evaluation pass that spends
//! real fitness calls only on the highest-priority outdated individuals.
//! The evaluated fraction starts at the configured rate and anneals
//! toward 1 as the run progresses, so laziness fades out.
//!
//! Termination is the caller's responsibility: loop over
//! [`run_epoch`](EvolutionEngine::run_epoch), watching the generation's
//! minimum fitness and [`total_evaluations`](EvolutionEngine::total_evaluations)
//! against the budget.

use crate::chromosome::Chromosome;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::fitness::FitnessFunction;
use crate::generation::Generation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-epoch annealing constant: the evaluation rate closes a 0.1% of its
/// remaining distance to 1 after every scheduler pass.
const EVALUATION_RATE_ANNEALING: f64 = 0.001;

/// Runs the evolutionary loop over an exclusively owned population.
pub struct EvolutionEngine<F: FitnessFunction> {
    config: EngineConfig,
    elitism_count: usize,
    generation: Generation,
    fitness_function: F,
    evaluation_rate: f64,
    total_evaluations: usize,
    rng: StdRng,
}

impl<F: FitnessFunction> EvolutionEngine<F> {
    /// Builds an engine around an initial generation.
    ///
    /// Fails if the configuration is invalid, the population size is odd,
    /// or the resolved elitism count is odd or not smaller than the
    /// population. On success every initial chromosome is evaluated once,
    /// unconditionally; this initial pass does **not** count against the
    /// evaluation budget.
    pub fn new(config: EngineConfig, first_generation: Generation, fitness_function: F) -> Result<Self> {
        config.validate()?;

        let size = first_generation.len();
        if size % 2 != 0 {
            return Err(Error::OddPopulation { size });
        }

        let elitism_count = config.elitism.resolve(size);
        if elitism_count % 2 != 0 {
            return Err(Error::OddElitism {
                count: elitism_count,
            });
        }
        if elitism_count >= size && size > 0 {
            return Err(Error::ElitismExceedsPopulation {
                count: elitism_count,
                size,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut engine = Self {
            evaluation_rate: config.initial_evaluation_rate,
            config,
            elitism_count,
            generation: first_generation,
            fitness_function,
            total_evaluations: 0,
            rng,
        };
        engine.evaluate_all();
        Ok(engine)
    }

    /// The current generation.
    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Cumulative count of real fitness evaluations, excluding the
    /// construction-time pass. Never exceeds the configured maximum.
    pub fn total_evaluations(&self) -> usize {
        self.total_evaluations
    }

    /// Current fraction of outdated individuals evaluated per epoch.
    pub fn evaluation_rate(&self) -> f64 {
        self.evaluation_rate
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Advances the population by one epoch.
    ///
    /// Elitism copies the best individuals verbatim (their current
    /// fitness, priority, and outdated state included — no
    /// re-evaluation), selection/crossover/mutation refill the remaining
    /// slots, then the scheduler evaluates the most urgent outdated
    /// individuals.
    pub fn run_epoch(&mut self) -> Result<()> {
        let size = self.generation.len();

        // elitism: best by ascending fitness, copied unchanged
        let mut order: Vec<usize> = (0..size).collect();
        order.sort_by(|&x, &y| {
            self.generation
                .get(x)
                .fitness()
                .partial_cmp(&self.generation.get(y).fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut next: Vec<Chromosome> = order
            .iter()
            .take(self.elitism_count)
            .map(|&i| self.generation.get(i).clone())
            .collect();

        while next.len() < size {
            let (a, b) = self
                .config
                .selection
                .select_parents(&self.generation, &mut self.rng)?;

            let (mut child1, mut child2) =
                if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                    self.recombine(a, b)?
                } else {
                    (self.generation.get(a).clone(), self.generation.get(b).clone())
                };

            self.maybe_mutate(&mut child1);
            self.maybe_mutate(&mut child2);

            next.push(child1);
            if next.len() < size {
                next.push(child2);
            }
        }

        self.generation = Generation::new(next);
        self.evaluate_population();
        Ok(())
    }

    /// Crossover two parents and derive the children's provisional
    /// fitness and scheduling priority from the parents'.
    fn recombine(&mut self, a: usize, b: usize) -> Result<(Chromosome, Chromosome)> {
        let parent_a = self.generation.get(a);
        let parent_b = self.generation.get(b);
        let (mut child1, mut child2) = parent_a.crossover(parent_b, &mut self.rng)?;

        // Provisional estimate: the parents' mean. It orders elitism
        // until the scheduler computes the real value.
        let mean = (parent_a.fitness() + parent_b.fitness()) / 2.0;
        child1.set_fitness(mean);
        child2.set_fitness(mean);

        // Children inherit one parent's accumulated priority each; which
        // one is decided by a fair coin.
        let (inherited1, inherited2) = if self.rng.random_bool(0.5) {
            (parent_a.priority(), parent_b.priority())
        } else {
            (parent_b.priority(), parent_a.priority())
        };

        // Parental disagreement makes the offspring's estimate less
        // trustworthy, so it raises their evaluation priority.
        let spread_a = parent_a.fitness() - mean;
        let spread_b = parent_b.fitness() - mean;
        let variance = (spread_a * spread_a + spread_b * spread_b) / 2.0;

        child1.set_priority(inherited1 + variance);
        child2.set_priority(inherited2 + variance);

        Ok((child1, child2))
    }

    fn maybe_mutate(&mut self, child: &mut Chromosome) {
        if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
            child.mutate(&mut self.rng);
            child.set_outdated(true);
            child.add_priority(self.config.mutation_weight);
        }
    }

    /// Adaptive lazy evaluation pass.
    ///
    /// Evaluates `floor(outdated × evaluation_rate)` of the outdated
    /// chromosomes in priority-descending order; every skipped one is
    /// aged by `non_evaluation_weight` so it rises in the next epoch's
    /// ordering. The sweep stops dead once the cumulative evaluation
    /// counter reaches the configured maximum — chromosomes past that
    /// point keep their stale fitness and are not aged this epoch.
    /// Afterwards the evaluation rate anneals toward full evaluation.
    fn evaluate_population(&mut self) {
        let mut outdated: Vec<usize> = (0..self.generation.len())
            .filter(|&i| self.generation.get(i).is_outdated())
            .collect();
        if outdated.is_empty() {
            return;
        }

        let evaluations = (outdated.len() as f64 * self.evaluation_rate) as usize;
        outdated.sort_by(|&x, &y| {
            self.generation
                .get(y)
                .priority()
                .partial_cmp(&self.generation.get(x).priority())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (rank, &index) in outdated.iter().enumerate() {
            if self.total_evaluations >= self.config.max_evaluations {
                break;
            }
            if rank < evaluations {
                let fitness = self.fitness_function.evaluate(self.generation.get(index));
                let chromosome = self.generation.get_mut(index);
                chromosome.set_fitness(fitness);
                chromosome.set_priority(0.0);
                chromosome.set_outdated(false);
                self.total_evaluations += 1;
            } else {
                self.generation
                    .get_mut(index)
                    .add_priority(self.config.non_evaluation_weight);
            }
        }

        if self.evaluation_rate < 1.0 {
            self.evaluation_rate += (1.0 - self.evaluation_rate) * EVALUATION_RATE_ANNEALING;
        }
        if self.evaluation_rate > 1.0 {
            self.evaluation_rate = 1.0;
        }
    }

    /// Unscheduled full evaluation of the initial generation; does not
    /// touch the budget counter.
    fn evaluate_all(&mut self) {
        for i in 0..self.generation.len() {
            let fitness = self.fitness_function.evaluate(self.generation.get(i));
            let chromosome = self.generation.get_mut(i);
            chromosome.set_fitness(fitness);
            chromosome.set_outdated(false);
        }
    }
}
