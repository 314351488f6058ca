//! Population container and derived statistics.

use crate::chromosome::Chromosome;
use rand::Rng;

/// An ordered, fixed-size collection of chromosomes.
///
/// A generation is owned exclusively by the engine between epochs and is
/// replaced wholesale each epoch; no chromosome survives across the
/// generation boundary except via the explicit elitism copy.
///
/// Statistics are derived on demand from the chromosomes' current fitness
/// values — which may include provisional estimates for individuals the
/// scheduler has not evaluated yet.
#[derive(Debug, Clone)]
pub struct Generation {
    chromosomes: Vec<Chromosome>,
}

impl Generation {
    /// Wraps an explicit list of chromosomes.
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Spawns `size` fresh random chromosomes from a blueprint.
    ///
    /// Every spawned individual has the blueprint's shape, a fresh random
    /// payload, and an outdated fitness.
    pub fn spawn<R: Rng>(size: usize, blueprint: &Chromosome, rng: &mut R) -> Self {
        let chromosomes = (0..size).map(|_| blueprint.spawn_random(rng)).collect();
        Self { chromosomes }
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the generation holds no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// The chromosome at `index`.
    pub fn get(&self, index: usize) -> &Chromosome {
        &self.chromosomes[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Chromosome {
        &mut self.chromosomes[index]
    }

    /// Iterates over the chromosomes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// The chromosomes as a slice.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Mean fitness over the generation.
    pub fn average_fitness(&self) -> f64 {
        let sum: f64 = self.chromosomes.iter().map(|c| c.fitness()).sum();
        sum / self.chromosomes.len() as f64
    }

    /// Highest fitness in the generation.
    pub fn max_fitness(&self) -> f64 {
        self.chromosomes
            .iter()
            .map(|c| c.fitness())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Lowest fitness in the generation.
    pub fn min_fitness(&self) -> f64 {
        self.chromosomes
            .iter()
            .map(|c| c.fitness())
            .fold(f64::INFINITY, f64::min)
    }

    /// Population standard deviation of fitness (divisor = count).
    pub fn fitness_std_dev(&self) -> f64 {
        let average = self.average_fitness();
        let sum_of_squares: f64 = self
            .chromosomes
            .iter()
            .map(|c| {
                let d = c.fitness() - average;
                d * d
            })
            .sum();
        (sum_of_squares / self.chromosomes.len() as f64).sqrt()
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}
