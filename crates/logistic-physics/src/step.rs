// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Coupled Logistic Recurrence
// ─────────────────────────────────────────────────────────────────────
//! One time step of the coupled logistic update:
//!
//!   f(x)  = r · x · (1 − x)
//!   X'    = f(X)                                  (N = 1)
//!   X'    = (1 − α) · f(X) + (α / N) · A · f(X)   (N > 1)
//!
//! Coupling is scaled by the total map count N, not by each map's
//! in-degree: sparse topologies get proportionally weaker coupling.
//! No clamping is applied; divergent regimes are part of the model.

use logistic_types::{LogisticError, LogisticResult};

use crate::matrix::InteractionMatrix;

/// The uncoupled logistic map.
#[inline]
pub fn logistic(x: f64, r: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Compute the next state vector. Pure and deterministic.
///
/// Fails with `DimensionMismatch` if `a` is not `x.len()` square.
pub fn logistic_step(
    x: &[f64],
    a: &InteractionMatrix,
    r: f64,
    alpha: f64,
) -> LogisticResult<Vec<f64>> {
    check_dims(x.len(), a)?;
    let mut f = vec![0.0; x.len()];
    let mut out = vec![0.0; x.len()];
    step_into(x, a, r, alpha, &mut f, &mut out);
    Ok(out)
}

pub(crate) fn check_dims(n: usize, a: &InteractionMatrix) -> LogisticResult<()> {
    if a.rows() != n || a.cols() != n {
        return Err(LogisticError::DimensionMismatch {
            state: n,
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(())
}

/// Allocation-free step. All slices must have length N and `a` must be
/// N×N; callers check this once up front.
#[inline]
pub(crate) fn step_into(
    x: &[f64],
    a: &InteractionMatrix,
    r: f64,
    alpha: f64,
    f: &mut [f64],
    out: &mut [f64],
) {
    let n = x.len();
    debug_assert_eq!(f.len(), n);
    debug_assert_eq!(out.len(), n);

    for (fi, &xi) in f.iter_mut().zip(x.iter()) {
        *fi = logistic(xi, r);
    }

    if n == 1 {
        out[0] = f[0];
        return;
    }

    // out ← A · f, then blend in place
    a.mul_vec_into(f, out);
    let scale = alpha / n as f64;
    for (yi, &fi) in out.iter_mut().zip(f.iter()) {
        *yi = (1.0 - alpha) * fi + scale * *yi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(n: usize) -> InteractionMatrix {
        let mut a = InteractionMatrix::ones(n);
        a.zero_diagonal();
        a
    }

    #[test]
    fn test_single_map_is_plain_logistic() {
        let a = InteractionMatrix::ones(1);
        for &x in &[0.0, 0.1, 0.37, 0.5, 0.99] {
            let next = logistic_step(&[x], &a, 3.7, 0.5).unwrap();
            assert_eq!(next[0], x * 3.7 * (1.0 - x));
        }
    }

    #[test]
    fn test_single_map_ignores_alpha() {
        let a = InteractionMatrix::ones(1);
        let base = logistic_step(&[0.42], &a, 3.9, 0.0).unwrap();
        for &alpha in &[0.1, 0.5, 1.0, 7.0] {
            let next = logistic_step(&[0.42], &a, 3.9, alpha).unwrap();
            assert_eq!(next, base, "alpha={alpha}");
        }
    }

    #[test]
    fn test_zero_alpha_ignores_matrix() {
        let x = [0.1, 0.4, 0.7];
        let dense = InteractionMatrix::from_rows(&[
            vec![0.0, 5.0, 2.0],
            vec![1.0, 0.0, 9.0],
            vec![3.0, 3.0, 0.0],
        ])
        .unwrap();
        let next = logistic_step(&x, &dense, 3.6, 0.0).unwrap();
        for (xi, yi) in x.iter().zip(next.iter()) {
            assert_eq!(*yi, logistic(*xi, 3.6));
        }
    }

    #[test]
    fn test_coupling_scaled_by_map_count() {
        // Two connected maps: x0' = (1-α) f0 + (α/2) f1
        let a = connected(2);
        let x = [0.2, 0.6];
        let (r, alpha) = (3.6, 0.4);
        let f0 = logistic(0.2, r);
        let f1 = logistic(0.6, r);
        let next = logistic_step(&x, &a, r, alpha).unwrap();
        assert!((next[0] - ((1.0 - alpha) * f0 + alpha / 2.0 * f1)).abs() < 1e-15);
        assert!((next[1] - ((1.0 - alpha) * f1 + alpha / 2.0 * f0)).abs() < 1e-15);
    }

    #[test]
    fn test_sparse_topology_not_degree_normalised() {
        // Map 0 has one neighbour out of N = 4; coupling still divides by 4.
        let mut a = InteractionMatrix::zeros(4);
        a.set(0, 1, 1.0);
        let x = [0.3, 0.5, 0.1, 0.9];
        let (r, alpha) = (3.8, 0.8);
        let next = logistic_step(&x, &a, r, alpha).unwrap();
        let expected = (1.0 - alpha) * logistic(0.3, r) + (alpha / 4.0) * logistic(0.5, r);
        assert!((next[0] - expected).abs() < 1e-15);
        // Maps without neighbours only keep the (1-α) share.
        assert!((next[2] - (1.0 - alpha) * logistic(0.1, r)).abs() < 1e-15);
    }

    #[test]
    fn test_full_coupling_synchronises_in_one_step() {
        // α = 1 on a complete graph with diagonal: every map sees the mean.
        let a = InteractionMatrix::ones(3);
        let next = logistic_step(&[0.1, 0.5, 0.8], &a, 3.7, 1.0).unwrap();
        assert!((next[0] - next[1]).abs() < 1e-15);
        assert!((next[1] - next[2]).abs() < 1e-15);
    }

    #[test]
    fn test_deterministic() {
        let a = connected(5);
        let x = [0.11, 0.23, 0.35, 0.47, 0.59];
        let first = logistic_step(&x, &a, 3.95, 0.3).unwrap();
        let second = logistic_step(&x, &a, 3.95, 0.3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_clamping() {
        // r > 4 pushes the state out of [0, 1] and that is allowed.
        let a = InteractionMatrix::ones(1);
        let next = logistic_step(&[0.5], &a, 4.4, 0.0).unwrap();
        assert!(next[0] > 1.0);
    }

    #[test]
    fn test_nan_propagates() {
        let a = connected(2);
        let next = logistic_step(&[f64::NAN, 0.5], &a, 3.6, 0.2).unwrap();
        assert!(next.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let a = connected(3);
        assert!(matches!(
            logistic_step(&[0.1, 0.2], &a, 3.6, 0.1),
            Err(LogisticError::DimensionMismatch {
                state: 2,
                rows: 3,
                cols: 3
            })
        ));
    }
}
