//! Chromosome representation: encoding payload plus scheduling metadata.
//!
//! A [`Chromosome`] couples an encoding payload ([`Genes`]) with the three
//! pieces of metadata the lazy evaluation scheduler works from:
//!
//! - `fitness`: the last computed or estimated objective value
//! - `outdated`: whether `fitness` reflects a real evaluation
//! - `priority`: scheduling weight deciding who gets evaluated first
//!
//! Encodings are a closed sum type rather than an open trait hierarchy:
//! every operation dispatches over the two variants, and mixing variants
//! in crossover is a caller error.

mod permutation;
mod real_vector;

pub use permutation::Permutation;
pub use real_vector::{RealCrossover, RealVector};

use crate::error::{Error, Result};
use rand::Rng;

/// Encoding payload of a chromosome.
#[derive(Debug, Clone, PartialEq)]
pub enum Genes {
    /// Fixed-length vector of reals with nominal bounds and a mutation step.
    Real(RealVector),
    /// Fixed-length permutation of `0..n-1`.
    Permutation(Permutation),
}

impl Genes {
    /// Number of genes in the payload.
    pub fn len(&self) -> usize {
        match self {
            Genes::Real(v) => v.len(),
            Genes::Permutation(p) => p.len(),
        }
    }

    /// Whether the payload has no genes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A candidate solution plus its fitness and scheduling metadata.
///
/// Chromosomes are owned values: they belong to exactly one [`Generation`]
/// at a time and move between generations; [`Clone`] is the only sharing
/// mechanism and always produces an independent deep copy that preserves
/// fitness, priority, and the outdated flag.
///
/// [`Generation`]: crate::Generation
#[derive(Debug, Clone)]
pub struct Chromosome {
    genes: Genes,
    fitness: f64,
    priority: f64,
    outdated: bool,
}

impl Chromosome {
    /// Wraps a payload into a fresh chromosome.
    ///
    /// Fresh chromosomes are outdated: their fitness (0.0) does not
    /// reflect any evaluation.
    pub fn new(genes: Genes) -> Self {
        Self {
            genes,
            fitness: 0.0,
            priority: 0.0,
            outdated: true,
        }
    }

    /// Creates a randomly initialized real-vector chromosome.
    ///
    /// Each gene is drawn uniformly from `[min, max]`. The bounds and the
    /// mutation step are carried along the lineage: children and spawned
    /// copies reuse them.
    pub fn real_vector<R: Rng>(
        length: usize,
        min: f64,
        max: f64,
        mutation_size: f64,
        crossover: RealCrossover,
        rng: &mut R,
    ) -> Self {
        Self::new(Genes::Real(RealVector::random(
            length,
            min,
            max,
            mutation_size,
            crossover,
            rng,
        )))
    }

    /// Creates a randomly initialized permutation chromosome over `0..length-1`.
    pub fn permutation<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self::new(Genes::Permutation(Permutation::random(length, rng)))
    }

    /// The last computed or estimated fitness.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The current scheduling priority. Unbounded; grows while skipped.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Whether the fitness reflects a real evaluation.
    pub fn is_outdated(&self) -> bool {
        self.outdated
    }

    /// The encoding payload.
    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the payload has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub(crate) fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    pub(crate) fn add_priority(&mut self, amount: f64) {
        self.priority += amount;
    }

    pub(crate) fn set_outdated(&mut self, outdated: bool) {
        self.outdated = outdated;
    }

    /// Produces a new, randomly initialized chromosome of the same shape.
    ///
    /// Used as the blueprint mechanism when spawning a generation: the
    /// payload is fresh random data, the metadata is reset (`outdated`).
    pub fn spawn_random<R: Rng>(&self, rng: &mut R) -> Self {
        let genes = match &self.genes {
            Genes::Real(v) => Genes::Real(v.spawn_random(rng)),
            Genes::Permutation(p) => Genes::Permutation(Permutation::random(p.len(), rng)),
        };
        Self::new(genes)
    }

    /// Perturbs the payload in place.
    ///
    /// Only the payload changes; the caller is responsible for marking the
    /// chromosome outdated and adjusting its priority.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        match &mut self.genes {
            Genes::Real(v) => v.mutate(rng),
            Genes::Permutation(p) => p.mutate(rng),
        }
    }

    /// Produces two children by recombining `self` with `other`.
    ///
    /// Both children are outdated with zeroed fitness and priority; the
    /// engine assigns provisional values afterwards. Fails if the parents
    /// use different encodings or different lengths.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<(Self, Self)> {
        if self.len() != other.len() {
            return Err(Error::IncompatibleParents {
                left: self.len(),
                right: other.len(),
            });
        }
        let (first, second) = match (&self.genes, &other.genes) {
            (Genes::Real(a), Genes::Real(b)) => {
                let (c1, c2) = a.crossover(b, rng);
                (Genes::Real(c1), Genes::Real(c2))
            }
            (Genes::Permutation(a), Genes::Permutation(b)) => {
                let (c1, c2) = a.crossover(b, rng);
                (Genes::Permutation(c1), Genes::Permutation(c2))
            }
            _ => return Err(Error::EncodingMismatch),
        };
        Ok((Self::new(first), Self::new(second)))
    }
}
