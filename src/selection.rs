//! Parent selection strategies.
//!
//! Selection picks two parents per refill step. Both strategies return
//! indices into the generation; whether the engine recombines or clones
//! the referenced chromosomes is its own decision.

use crate::error::{Error, Result};
use crate::generation::Generation;
use rand::Rng;

/// Strategy for choosing a pair of parents from a generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: a group of `floor(len × tournament_rate)`
    /// candidates is drawn **with replacement** and the extremum by
    /// fitness wins. Ties keep the first-found candidate.
    Tournament {
        /// Fraction of the population that competes in one tournament.
        tournament_rate: f64,
        /// Pick the lowest fitness when true, the highest otherwise.
        minimize: bool,
        /// When false, the first winner is removed from the candidate
        /// pool before the second tournament is drawn.
        winner_competes_again: bool,
    },

    /// Fitness-proportionate (roulette-wheel) selection.
    ///
    /// Maximization-oriented: the total fitness must be strictly positive
    /// or selection fails. Both parents are drawn independently and may
    /// be the same individual.
    RouletteWheel,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament {
            tournament_rate: 0.1,
            minimize: true,
            winner_competes_again: true,
        }
    }
}

impl Selection {
    /// Selects two parent indices from the generation.
    pub fn select_parents<R: Rng>(
        &self,
        generation: &Generation,
        rng: &mut R,
    ) -> Result<(usize, usize)> {
        if generation.is_empty() {
            return Err(Error::EmptyGeneration);
        }
        match *self {
            Selection::Tournament {
                tournament_rate,
                minimize,
                winner_competes_again,
            } => tournament_pair(generation, tournament_rate, minimize, winner_competes_again, rng),
            Selection::RouletteWheel => roulette_pair(generation, rng),
        }
    }
}

fn tournament_pair<R: Rng>(
    generation: &Generation,
    tournament_rate: f64,
    minimize: bool,
    winner_competes_again: bool,
    rng: &mut R,
) -> Result<(usize, usize)> {
    let size = (generation.len() as f64 * tournament_rate) as usize;
    if size == 0 {
        return Err(Error::EmptyTournament);
    }

    let pool: Vec<usize> = (0..generation.len()).collect();
    let first = run_tournament(generation, &pool, size, minimize, rng);

    let second = if winner_competes_again {
        run_tournament(generation, &pool, size, minimize, rng)
    } else {
        let reduced: Vec<usize> = pool.into_iter().filter(|&i| i != first).collect();
        if reduced.is_empty() {
            return Err(Error::EmptyGeneration);
        }
        run_tournament(generation, &reduced, size, minimize, rng)
    };

    Ok((first, second))
}

/// Draw `size` candidates with replacement from `pool`, return the winner.
fn run_tournament<R: Rng>(
    generation: &Generation,
    pool: &[usize],
    size: usize,
    minimize: bool,
    rng: &mut R,
) -> usize {
    let mut best = pool[rng.random_range(0..pool.len())];
    let mut best_fitness = generation.get(best).fitness();

    for _ in 1..size {
        let candidate = pool[rng.random_range(0..pool.len())];
        let fitness = generation.get(candidate).fitness();
        let wins = if minimize {
            fitness < best_fitness
        } else {
            fitness > best_fitness
        };
        if wins {
            best = candidate;
            best_fitness = fitness;
        }
    }

    best
}

fn roulette_pair<R: Rng>(generation: &Generation, rng: &mut R) -> Result<(usize, usize)> {
    let total: f64 = generation.iter().map(|c| c.fitness()).sum();
    if !(total > 0.0) || !total.is_finite() {
        return Err(Error::NonPositiveFitness { total });
    }

    let mut wheel = Vec::with_capacity(generation.len());
    let mut cumulative = 0.0;
    for c in generation {
        cumulative += c.fitness() / total;
        wheel.push(cumulative);
    }

    let first = spin(&wheel, rng.random::<f64>());
    let second = spin(&wheel, rng.random::<f64>());
    Ok((first, second))
}

/// First index whose cumulative normalized fitness reaches `u`.
fn spin(wheel: &[f64], u: f64) -> usize {
    for (i, &edge) in wheel.iter().enumerate() {
        if u <= edge {
            return i;
        }
    }
    wheel.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::{Chromosome, Genes, Permutation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generation_with_fitness(values: &[f64]) -> Generation {
        let chromosomes = values
            .iter()
            .map(|&f| {
                let mut c = Chromosome::new(Genes::Permutation(Permutation::from_positions(
                    (0..4).collect(),
                )));
                c.set_fitness(f);
                c.set_outdated(false);
                c
            })
            .collect();
        Generation::new(chromosomes)
    }

    #[test]
    fn test_tournament_favors_best_when_minimizing() {
        let generation = generation_with_fitness(&[10.0, 5.0, 1.0, 8.0]);
        let selection = Selection::Tournament {
            tournament_rate: 1.0,
            minimize: true,
            winner_competes_again: true,
        };
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            let (a, _) = selection.select_parents(&generation, &mut rng).unwrap();
            counts[a] += 1;
        }
        // With tournament size = population size, the best individual wins
        // most tournaments despite with-replacement sampling.
        assert!(
            counts[2] > 6000,
            "expected index 2 to win >60% of tournaments, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_maximize_picks_highest() {
        let generation = generation_with_fitness(&[10.0, 5.0, 1.0, 8.0]);
        let selection = Selection::Tournament {
            tournament_rate: 1.0,
            minimize: false,
            winner_competes_again: true,
        };
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            let (a, _) = selection.select_parents(&generation, &mut rng).unwrap();
            counts[a] += 1;
        }
        assert!(
            counts[0] > counts[2],
            "highest fitness should dominate when maximizing: {counts:?}"
        );
    }

    #[test]
    fn test_tournament_excluded_winner_never_reselected() {
        let generation = generation_with_fitness(&[10.0, 5.0, 1.0, 8.0]);
        let selection = Selection::Tournament {
            tournament_rate: 1.0,
            minimize: true,
            winner_competes_again: false,
        };
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let (a, b) = selection.select_parents(&generation, &mut rng).unwrap();
            assert_ne!(a, b, "excluded winner must not be drawn again");
        }
    }

    #[test]
    fn test_tournament_winner_may_repeat_when_allowed() {
        let generation = generation_with_fitness(&[10.0, 1.0]);
        let selection = Selection::Tournament {
            tournament_rate: 1.0,
            minimize: true,
            winner_competes_again: true,
        };
        let mut rng = StdRng::seed_from_u64(42);

        let mut repeated = false;
        for _ in 0..200 {
            let (a, b) = selection.select_parents(&generation, &mut rng).unwrap();
            if a == b {
                repeated = true;
                break;
            }
        }
        assert!(repeated, "both parents should sometimes be the same individual");
    }

    #[test]
    fn test_tournament_zero_size_fails() {
        let generation = generation_with_fitness(&[1.0, 2.0, 3.0, 4.0]);
        let selection = Selection::Tournament {
            tournament_rate: 0.1, // floor(4 * 0.1) = 0
            minimize: true,
            winner_competes_again: true,
        };
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            selection.select_parents(&generation, &mut rng),
            Err(Error::EmptyTournament)
        );
    }

    #[test]
    fn test_roulette_fixed_draw_hits_second_individual() {
        // Fitness [1,1,1,1]: cumulative wheel is [0.25, 0.5, 0.75, 1.0];
        // u = 0.3 falls past 0.25 and within 0.5, so index 1 is chosen.
        let wheel = [0.25, 0.5, 0.75, 1.0];
        assert_eq!(spin(&wheel, 0.3), 1);
        assert_eq!(spin(&wheel, 0.25), 0);
        assert_eq!(spin(&wheel, 0.0), 0);
        assert_eq!(spin(&wheel, 0.99), 3);
    }

    #[test]
    fn test_roulette_favors_high_fitness() {
        let generation = generation_with_fitness(&[100.0, 1.0, 1.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            let (a, b) = Selection::RouletteWheel
                .select_parents(&generation, &mut rng)
                .unwrap();
            counts[a] += 1;
            counts[b] += 1;
        }
        assert!(
            counts[0] > 15_000,
            "dominant fitness should win most draws: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_rejects_zero_total() {
        let generation = generation_with_fitness(&[0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Selection::RouletteWheel.select_parents(&generation, &mut rng),
            Err(Error::NonPositiveFitness { total: 0.0 })
        );
    }

    #[test]
    fn test_roulette_rejects_negative_total() {
        let generation = generation_with_fitness(&[1.0, -3.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Selection::RouletteWheel.select_parents(&generation, &mut rng),
            Err(Error::NonPositiveFitness { total: -2.0 })
        );
    }

    #[test]
    fn test_empty_generation_fails() {
        let generation = Generation::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Selection::default().select_parents(&generation, &mut rng),
            Err(Error::EmptyGeneration)
        );
        assert_eq!(
            Selection::RouletteWheel.select_parents(&generation, &mut rng),
            Err(Error::EmptyGeneration)
        );
    }
}
