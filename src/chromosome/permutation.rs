//! Integer permutation encoding.
//!
//! The payload is always a bijection onto `0..len-1`; every operator
//! preserves that invariant, including crossover, which rebuilds children
//! gene by gene from parent precedence information.

use rand::Rng;

/// Fixed-length permutation of `0..len-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Permutation {
    positions: Vec<usize>,
}

impl Permutation {
    /// Creates a random permutation: an ascending sequence shuffled by
    /// `len / 2` swaps of two independently drawn indices (which may
    /// coincide or repeat).
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let mut positions: Vec<usize> = (0..length).collect();
        for _ in 0..length / 2 {
            let j1 = rng.random_range(0..length);
            let j2 = rng.random_range(0..length);
            positions.swap(j1, j2);
        }
        Self { positions }
    }

    /// Wraps an explicit permutation of `0..len-1`.
    ///
    /// # Panics
    /// Panics if `positions` is not a permutation of `0..len`.
    pub fn from_positions(positions: Vec<usize>) -> Self {
        assert!(
            is_permutation(&positions),
            "positions must be a permutation of 0..len"
        );
        Self { positions }
    }

    /// The permutation values.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the permutation has no elements.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Swaps two independently drawn positions.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let j1 = rng.random_range(0..self.positions.len());
        let j2 = rng.random_range(0..self.positions.len());
        self.positions.swap(j1, j2);
    }

    /// Precedence-preserving crossover.
    ///
    /// Each child is grown gene by gene: the first gene comes from the
    /// *other* parent's first element, and every following gene is the
    /// successor of the previously placed value in one of the two parents
    /// (wrapping past the end). When both successors are already used, a
    /// still-unused value is picked by scanning upward from a random
    /// start, falling back to a downward scan. The second child swaps the
    /// parent roles. Children are always valid permutations.
    ///
    /// Callers must have checked that both parents share the same length.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let first = build_child(&self.positions, &other.positions, rng);
        let second = build_child(&other.positions, &self.positions, rng);
        (
            Self { positions: first },
            Self { positions: second },
        )
    }
}

/// Grow one child from two parents; the first gene is `parent2[0]`.
fn build_child<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    let index1 = index_of(parent1);
    let index2 = index_of(parent2);

    let mut used = vec![false; n];
    let mut child = Vec::with_capacity(n);

    let mut prev = parent2[0];
    child.push(prev);
    used[prev] = true;

    for _ in 1..n {
        // successor of prev in each parent, wrapping to the front
        let j = index1[prev];
        let next1 = if j == n - 1 { parent1[0] } else { parent1[j + 1] };
        let j = index2[prev];
        let next2 = if j == n - 1 { parent2[0] } else { parent2[j + 1] };

        let valid1 = !used[next1];
        let valid2 = !used[next2];

        prev = if valid1 && valid2 {
            if rng.random_range(0..2) == 0 {
                next1
            } else {
                next2
            }
        } else if valid1 {
            next1
        } else if valid2 {
            next2
        } else {
            // both successors taken: take an unused value, scanning up
            // from a random start and down from start - 1 if the upward
            // scan runs off the end (it only can when start > 0, since
            // scanning up from 0 visits every value)
            let start = rng.random_range(0..n);
            let mut v = start;
            while v < n && used[v] {
                v += 1;
            }
            if v == n {
                v = start - 1;
                while used[v] {
                    v -= 1;
                }
            }
            v
        };

        child.push(prev);
        used[prev] = true;
    }

    child
}

/// Position of each value in the parent, indexed by value.
fn index_of(genes: &[usize]) -> Vec<usize> {
    let mut index = vec![0; genes.len()];
    for (i, &v) in genes.iter().enumerate() {
        index[v] = i;
    }
    index
}

fn is_permutation(positions: &[usize]) -> bool {
    let n = positions.len();
    let mut seen = vec![false; n];
    for &v in positions {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
