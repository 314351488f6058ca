//! Bounded real-vector encoding.
//!
//! Genes are reals initialized uniformly in `[min, max]`. The bounds are
//! nominal: mutation and blend crossover may drift genes outside them, and
//! no reclamping is applied. Bounds constrain spawning only.

use rand::Rng;

/// Crossover mode for real-vector chromosomes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RealCrossover {
    /// Single cut point drawn uniformly in `[0, len)`; the children
    /// exchange tails at the cut.
    OnePoint,
    /// Blend (BLX-α) crossover: per gene, each child draws independently
    /// and uniformly from the parents' interval widened by α times its
    /// width on both sides. α = 0.5 is the conventional choice.
    BlendAlpha(f64),
}

impl Default for RealCrossover {
    fn default() -> Self {
        RealCrossover::OnePoint
    }
}

/// Fixed-length vector of reals with nominal bounds and a mutation step.
#[derive(Debug, Clone, PartialEq)]
pub struct RealVector {
    values: Vec<f64>,
    min: f64,
    max: f64,
    mutation_size: f64,
    crossover: RealCrossover,
}

impl RealVector {
    /// Creates a vector with each gene drawn uniformly from `[min, max]`.
    pub fn random<R: Rng>(
        length: usize,
        min: f64,
        max: f64,
        mutation_size: f64,
        crossover: RealCrossover,
        rng: &mut R,
    ) -> Self {
        let values = (0..length).map(|_| rng.random_range(min..=max)).collect();
        Self {
            values,
            min,
            max,
            mutation_size,
            crossover,
        }
    }

    /// Wraps explicit gene values, carrying the given lineage parameters.
    pub fn from_values(
        values: Vec<f64>,
        min: f64,
        max: f64,
        mutation_size: f64,
        crossover: RealCrossover,
    ) -> Self {
        Self {
            values,
            min,
            max,
            mutation_size,
            crossover,
        }
    }

    /// The gene values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no genes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lower nominal bound used for random initialization.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper nominal bound used for random initialization.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Maximum magnitude of a single mutation step.
    pub fn mutation_size(&self) -> f64 {
        self.mutation_size
    }

    /// A fresh random vector with the same shape and lineage parameters.
    pub fn spawn_random<R: Rng>(&self, rng: &mut R) -> Self {
        Self::random(
            self.values.len(),
            self.min,
            self.max,
            self.mutation_size,
            self.crossover,
            rng,
        )
    }

    /// Perturbs one uniformly chosen gene by a uniform step in
    /// `[-mutation_size, mutation_size]`. The result is not reclamped to
    /// `[min, max]`.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let position = rng.random_range(0..self.values.len());
        self.values[position] += rng.random_range(-self.mutation_size..=self.mutation_size);
    }

    /// Recombines two vectors according to the configured crossover mode.
    ///
    /// Children inherit `self`'s lineage parameters. Callers must have
    /// checked that both parents share the same length.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let (first, second) = match self.crossover {
            RealCrossover::OnePoint => {
                let cut = rng.random_range(0..self.values.len());
                one_point_split(&self.values, &other.values, cut)
            }
            RealCrossover::BlendAlpha(alpha) => blend(&self.values, &other.values, alpha, rng),
        };
        (self.child(first), self.child(second))
    }

    fn child(&self, values: Vec<f64>) -> Self {
        Self {
            values,
            min: self.min,
            max: self.max,
            mutation_size: self.mutation_size,
            crossover: self.crossover,
        }
    }
}

/// One-point crossover at a fixed cut: the children swap tails.
fn one_point_split(a: &[f64], b: &[f64], cut: usize) -> (Vec<f64>, Vec<f64>) {
    let mut first = Vec::with_capacity(a.len());
    let mut second = Vec::with_capacity(b.len());

    first.extend_from_slice(&a[..cut]);
    first.extend_from_slice(&b[cut..]);

    second.extend_from_slice(&b[..cut]);
    second.extend_from_slice(&a[cut..]);

    (first, second)
}

/// Blend-α crossover: per gene, both children draw independently from the
/// interval `[min(a,b) - αd, max(a,b) + αd]` where `d = |a - b|`. Values
/// may exceed the nominal gene bounds.
fn blend<R: Rng>(a: &[f64], b: &[f64], alpha: f64, rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let mut first = Vec::with_capacity(a.len());
    let mut second = Vec::with_capacity(b.len());

    for (&x, &y) in a.iter().zip(b.iter()) {
        let d = (x - y).abs();
        let lo = x.min(y) - alpha * d;
        let hi = x.max(y) + alpha * d;
        first.push(rng.random_range(lo..=hi));
        second.push(rng.random_range(lo..=hi));
    }

    (first, second)
}
