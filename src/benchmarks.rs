//! Stock objective functions for benchmarking and testing.
//!
//! These implement [`FitnessFunction`] like any user-supplied objective;
//! the engine has no special knowledge of them. All are minimization
//! problems with known optima.

use crate::chromosome::{Chromosome, Genes};
use crate::fitness::FitnessFunction;
use rand::Rng;

/// Sphere function: `f(x) = Σ xᵢ²`, global minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl FitnessFunction for Sphere {
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let values = real_values(chromosome, "sphere");
        values.iter().map(|x| x * x).sum()
    }
}

/// Griewank function: `1 + Σ xᵢ²/4000 − Π cos(xᵢ/√(i+1))`, global
/// minimum 0 at the origin, with many regularly spaced local minima.
#[derive(Debug, Clone, Copy, Default)]
pub struct Griewank;

impl FitnessFunction for Griewank {
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let values = real_values(chromosome, "griewank");

        let mut sum = 0.0;
        let mut product = 1.0;
        for (i, &x) in values.iter().enumerate() {
            sum += x * x;
            product *= (x / ((i + 1) as f64).sqrt()).cos();
        }

        1.0 + sum / 4000.0 - product
    }
}

/// Closed-tour Euclidean length over a permutation of city indices.
#[derive(Debug, Clone)]
pub struct TourLength {
    cities: Vec<(f64, f64)>,
}

impl TourLength {
    /// Uses an explicit city map; `cities[i]` is the location of city `i`.
    pub fn new(cities: Vec<(f64, f64)>) -> Self {
        Self { cities }
    }

    /// Generates `count` cities uniformly on the integer grid `[0, 10]²`.
    pub fn random_map<R: Rng>(count: usize, rng: &mut R) -> Self {
        let cities = (0..count)
            .map(|_| {
                (
                    rng.random_range(0..11) as f64,
                    rng.random_range(0..11) as f64,
                )
            })
            .collect();
        Self { cities }
    }

    /// The city map.
    pub fn cities(&self) -> &[(f64, f64)] {
        &self.cities
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        let (ax, ay) = self.cities[a];
        let (bx, by) = self.cities[b];
        let dx = bx - ax;
        let dy = by - ay;
        (dx * dx + dy * dy).sqrt()
    }
}

impl FitnessFunction for TourLength {
    /// # Panics
    /// Panics if the chromosome is not a permutation visiting every city
    /// exactly once.
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let path = match chromosome.genes() {
            Genes::Permutation(p) => p.positions(),
            _ => panic!("tour length requires a permutation chromosome"),
        };
        assert_eq!(
            path.len(),
            self.cities.len(),
            "tour must visit every city exactly once"
        );

        // closing edge plus the consecutive legs
        let mut length = self.distance(path[path.len() - 1], path[0]);
        for pair in path.windows(2) {
            length += self.distance(pair[0], pair[1]);
        }
        length
    }
}

fn real_values<'a>(chromosome: &'a Chromosome, name: &str) -> &'a [f64] {
    match chromosome.genes() {
        Genes::Real(v) => v.values(),
        _ => panic!("{name} requires a real-valued chromosome"),
    }
}
