// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Trajectory Recorder
// ─────────────────────────────────────────────────────────────────────
//! Append-only record of a run: one state snapshot per step plus the
//! order parameter (mean state) and the sample variance across maps.
//!
//! Snapshots live in one flat, pre-sized buffer owned by the recorder
//! (step-major, N values per step). Everything outside this module
//! sees read-only views.

use logistic_types::{LogisticError, LogisticResult};
use serde::{Deserialize, Serialize};

/// Time-averaged observables of a recorded run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub steps: usize,
    pub mean_order: f64,
    pub mean_variance: f64,
    pub final_order: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    n: usize,
    snapshots: Vec<f64>,
    order: Vec<f64>,
    variance: Vec<f64>,
    first_non_finite: Option<usize>,
}

/// Arithmetic mean of a state vector.
#[inline]
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Sample variance (N − 1 divisor). Exactly 0 for a single map.
#[inline]
pub fn sample_variance(x: &[f64], mean: f64) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    x.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (x.len() - 1) as f64
}

impl Trajectory {
    /// Empty recorder for N maps with room for `steps` snapshots.
    pub fn with_capacity(n: usize, steps: usize) -> Self {
        Self {
            n,
            snapshots: Vec::with_capacity(n * steps),
            order: Vec::with_capacity(steps),
            variance: Vec::with_capacity(steps),
            first_non_finite: None,
        }
    }

    /// Reserve room for `additional` more snapshots.
    pub fn reserve(&mut self, additional: usize) {
        self.snapshots.reserve(self.n * additional);
        self.order.reserve(additional);
        self.variance.reserve(additional);
    }

    /// Append a copy of `x` and its derived statistics.
    pub(crate) fn record(&mut self, x: &[f64]) {
        debug_assert_eq!(x.len(), self.n);
        let m = mean(x);
        let step = self.order.len();
        if self.first_non_finite.is_none() && x.iter().any(|v| !v.is_finite()) {
            self.first_non_finite = Some(step);
        }
        self.snapshots.extend_from_slice(x);
        self.order.push(m);
        self.variance.push(sample_variance(x, m));
    }

    /// Number of maps per snapshot.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// State vector at step t.
    pub fn snapshot(&self, t: usize) -> Option<&[f64]> {
        if t >= self.len() {
            return None;
        }
        Some(&self.snapshots[t * self.n..(t + 1) * self.n])
    }

    /// Time series of map i.
    pub fn map_series(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        let n = self.n;
        self.snapshots
            .iter()
            .skip(i)
            .step_by(n.max(1))
            .take(if i < n { self.len() } else { 0 })
            .copied()
    }

    /// Snapshots stacked as columns: N rows, one column per step.
    pub fn dynamics(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.map_series(i).collect()).collect()
    }

    /// Order parameter per step (mean state across maps).
    pub fn order(&self) -> &[f64] {
        &self.order
    }

    /// Sample variance across maps per step.
    pub fn variance(&self) -> &[f64] {
        &self.variance
    }

    /// First step whose snapshot holds a NaN or infinite value.
    pub fn first_non_finite_step(&self) -> Option<usize> {
        self.first_non_finite
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite.is_none()
    }

    /// Strict check for callers that treat divergence as an error.
    pub fn ensure_finite(&self) -> LogisticResult<()> {
        match self.first_non_finite {
            None => Ok(()),
            Some(step) => Err(LogisticError::Numerical(format!(
                "state became non-finite at step {step}"
            ))),
        }
    }

    pub fn summary(&self) -> TrajectorySummary {
        TrajectorySummary {
            steps: self.len(),
            mean_order: mean(&self.order),
            mean_variance: mean(&self.variance),
            final_order: self.order.last().copied().unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(rows: &[&[f64]]) -> Trajectory {
        let mut t = Trajectory::with_capacity(rows[0].len(), rows.len());
        for r in rows {
            t.record(r);
        }
        t
    }

    #[test]
    fn test_mean_and_variance() {
        let x = [0.2, 0.4, 0.6];
        let m = mean(&x);
        assert!((m - 0.4).abs() < 1e-15);
        // ((-0.2)^2 + 0 + 0.2^2) / 2 = 0.04
        assert!((sample_variance(&x, m) - 0.04).abs() < 1e-15);
    }

    #[test]
    fn test_variance_zero_for_single_map() {
        let t = recorded(&[&[0.3], &[0.7], &[f64::NAN]]);
        assert!(t.variance().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_snapshots_are_copies() {
        let mut x = vec![0.1, 0.2];
        let mut t = Trajectory::with_capacity(2, 2);
        t.record(&x);
        x[0] = 0.9;
        t.record(&x);
        assert_eq!(t.snapshot(0).unwrap(), &[0.1, 0.2]);
        assert_eq!(t.snapshot(1).unwrap(), &[0.9, 0.2]);
        assert!(t.snapshot(2).is_none());
    }

    #[test]
    fn test_dynamics_columns_are_snapshots() {
        let t = recorded(&[&[0.1, 0.2, 0.3], &[0.4, 0.5, 0.6]]);
        let d = t.dynamics();
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], vec![0.1, 0.4]);
        assert_eq!(d[2], vec![0.3, 0.6]);
    }

    #[test]
    fn test_map_series_out_of_range_is_empty() {
        let t = recorded(&[&[0.1, 0.2]]);
        assert_eq!(t.map_series(5).count(), 0);
    }

    #[test]
    fn test_order_matches_snapshot_mean() {
        let t = recorded(&[&[0.1, 0.3], &[0.5, 0.9], &[0.0, 1.0]]);
        for step in 0..t.len() {
            assert_eq!(t.order()[step], mean(t.snapshot(step).unwrap()));
        }
    }

    #[test]
    fn test_non_finite_detection() {
        let t = recorded(&[&[0.1, 0.2], &[0.3, f64::INFINITY], &[f64::NAN, 0.1]]);
        assert_eq!(t.first_non_finite_step(), Some(1));
        assert!(!t.is_finite());
        assert!(matches!(t.ensure_finite(), Err(LogisticError::Numerical(_))));
    }

    #[test]
    fn test_summary() {
        let t = recorded(&[&[0.0, 0.2], &[0.4, 0.6]]);
        let s = t.summary();
        assert_eq!(s.steps, 2);
        assert!((s.mean_order - 0.3).abs() < 1e-15);
        assert!((s.final_order - 0.5).abs() < 1e-15);
        assert!((s.mean_variance - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_empty_trajectory() {
        let t = Trajectory::with_capacity(3, 0);
        assert!(t.is_empty());
        assert!(t.ensure_finite().is_ok());
        assert_eq!(t.summary().final_order, 0.0);
    }
}
