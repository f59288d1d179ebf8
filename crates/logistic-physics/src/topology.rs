// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Interaction Topologies
// ─────────────────────────────────────────────────────────────────────
//! Builders for the per-configuration interaction matrix.
//!
//! The sweep calls a `TopologyBuilder` once per configuration with that
//! configuration's own RNG, so random topologies stay reproducible.

use logistic_types::Topology;
use rand::{Rng, RngCore};

use crate::matrix::InteractionMatrix;

/// Produces an N×N interaction matrix for a configuration.
///
/// The diagonal need not be zero; `LogisticMaps::new` normalises it.
pub trait TopologyBuilder: Send + Sync {
    fn build(&self, n: usize, rng: &mut dyn RngCore) -> InteractionMatrix;
}

impl TopologyBuilder for Topology {
    fn build(&self, n: usize, rng: &mut dyn RngCore) -> InteractionMatrix {
        match *self {
            Topology::FullyConnected => InteractionMatrix::ones(n),
            Topology::RandomBinary { p } => random_binary(n, p, rng),
            Topology::Ring => ring(n),
        }
    }
}

/// Every entry independently 1 with probability `p` (not symmetrised).
pub fn random_binary(n: usize, p: f64, rng: &mut dyn RngCore) -> InteractionMatrix {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut a = InteractionMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            if rng.gen_bool(p) {
                a.set(i, j, 1.0);
            }
        }
    }
    a
}

/// Symmetric cycle: map i couples to i − 1 and i + 1 (mod N).
pub fn ring(n: usize) -> InteractionMatrix {
    let mut a = InteractionMatrix::zeros(n);
    if n < 2 {
        return a;
    }
    for i in 0..n {
        a.set(i, (i + 1) % n, 1.0);
        a.set(i, (i + n - 1) % n, 1.0);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fully_connected_is_all_ones() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Topology::FullyConnected.build(3, &mut rng);
        assert!(a.as_slice().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_random_binary_entries_are_binary() {
        let mut rng = StdRng::seed_from_u64(2);
        let a = Topology::RandomBinary { p: 0.5 }.build(16, &mut rng);
        assert!(a.as_slice().iter().all(|&w| w == 0.0 || w == 1.0));
        let ones = a.as_slice().iter().filter(|&&w| w == 1.0).count();
        assert!(ones > 64 && ones < 192, "ones={ones} of 256");
    }

    #[test]
    fn test_random_binary_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random_binary(5, 0.0, &mut rng).as_slice().iter().all(|&w| w == 0.0));
        assert!(random_binary(5, 1.0, &mut rng).as_slice().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_random_binary_reproducible() {
        let a = random_binary(8, 0.3, &mut StdRng::seed_from_u64(9));
        let b = random_binary(8, 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ring_degree_two() {
        let a = ring(6);
        for i in 0..6 {
            assert_eq!(a.degree(i), 2, "map {i}");
            assert_eq!(a.get(i, i), 0.0);
            assert_eq!(a.get(i, (i + 1) % 6), a.get((i + 1) % 6, i));
        }
    }

    #[test]
    fn test_ring_small() {
        assert_eq!(ring(1).as_slice(), &[0.0]);
        let two = ring(2);
        assert_eq!(two.get(0, 1), 1.0);
        assert_eq!(two.get(0, 0), 0.0);
    }
}
