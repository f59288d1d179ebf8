// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Coupled Logistic Maps (Simulation Run)
// ─────────────────────────────────────────────────────────────────────
//! Owns the running state, the normalised interaction matrix, the
//! scalar parameters, and an optional trajectory recorder.
//!
//! The matrix is taken by value and its diagonal is zeroed at
//! construction; callers keep no alias to it.

use logistic_types::run::{alpha_in_domain, r_in_domain};
use logistic_types::LogisticResult;
use serde::{Deserialize, Serialize};

use crate::matrix::InteractionMatrix;
use crate::recorder::Trajectory;
use crate::step::{check_dims, step_into};

/// Scalar parameters of the coupled system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    /// Control parameter, nominally (0, 4]; chaotic above ~3.54.
    pub r: f64,
    /// Coupling strength, nominally [0, 1]; 0 = uncoupled.
    pub alpha: f64,
}

impl LogisticParams {
    pub fn new(r: f64, alpha: f64) -> Self {
        Self { r, alpha }
    }

    /// Log a warning for values outside the nominal domains.
    /// Returns true when both are inside.
    pub fn check_domain(&self) -> bool {
        let mut ok = true;
        if !r_in_domain(self.r) {
            log::warn!("r = {} outside (0, 4]; state may leave [0, 1]", self.r);
            ok = false;
        }
        if !alpha_in_domain(self.alpha) {
            log::warn!("alpha = {} outside [0, 1]", self.alpha);
            ok = false;
        }
        ok
    }
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self { r: 3.6, alpha: 0.3 }
    }
}

/// A system of N coupled logistic maps.
#[derive(Debug, Clone)]
pub struct LogisticMaps {
    x: Vec<f64>,
    a: InteractionMatrix,
    params: LogisticParams,
    step_count: usize,
    trajectory: Option<Trajectory>,
    /// True when the current state is already the last recorded snapshot.
    current_recorded: bool,
    // Scratch
    f_scratch: Vec<f64>,
    next: Vec<f64>,
}

impl LogisticMaps {
    /// Build a run from an initial state and an interaction matrix.
    ///
    /// Fails with `DimensionMismatch` unless `a` is `x0.len()` square.
    /// The diagonal of `a` is forced to zero. Out-of-domain parameters
    /// are logged, not rejected.
    pub fn new(
        x0: Vec<f64>,
        a: InteractionMatrix,
        params: LogisticParams,
    ) -> LogisticResult<Self> {
        let maps = Self::new_quiet(x0, a, params)?;
        params.check_domain();
        Ok(maps)
    }

    /// Same as [`LogisticMaps::new`] without the domain warnings, for
    /// callers that already checked the parameters once up front.
    pub fn new_quiet(
        x0: Vec<f64>,
        mut a: InteractionMatrix,
        params: LogisticParams,
    ) -> LogisticResult<Self> {
        check_dims(x0.len(), &a)?;
        a.zero_diagonal();
        let n = x0.len();
        Ok(Self {
            x: x0,
            a,
            params,
            step_count: 0,
            trajectory: None,
            current_recorded: false,
            f_scratch: vec![0.0; n],
            next: vec![0.0; n],
        })
    }

    /// Number of maps.
    pub fn n(&self) -> usize {
        self.x.len()
    }

    /// Current state vector.
    pub fn state(&self) -> &[f64] {
        &self.x
    }

    /// Normalised interaction matrix (zero diagonal).
    pub fn matrix(&self) -> &InteractionMatrix {
        &self.a
    }

    pub fn params(&self) -> LogisticParams {
        self.params
    }

    /// Updates applied so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Recorded trajectory, or `None` if no step was ever saved.
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref().filter(|t| !t.is_empty())
    }

    pub fn into_trajectory(self) -> Option<Trajectory> {
        self.trajectory.filter(|t| !t.is_empty())
    }

    /// Advance by `n_steps`, recording every state when `save` is set.
    ///
    /// The state before the first update is recorded too, so a fresh
    /// run yields `n_steps + 1` snapshots. A continued run does not
    /// record the same state twice.
    pub fn run(&mut self, n_steps: usize, save: bool) {
        if save {
            let pending = n_steps + usize::from(!self.current_recorded);
            let n = self.n();
            self.trajectory
                .get_or_insert_with(|| Trajectory::with_capacity(n, 0))
                .reserve(pending);
            self.record_current();
        } else {
            self.current_recorded = false;
        }

        let was_finite = self.x.iter().all(|v| v.is_finite());
        let mut warned = !was_finite;
        for _ in 0..n_steps {
            self.advance();
            if save {
                self.record_current();
            }
            if !warned && self.x.iter().any(|v| !v.is_finite()) {
                log::warn!(
                    "state became non-finite at step {} (r={}, alpha={}, n={})",
                    self.step_count,
                    self.params.r,
                    self.params.alpha,
                    self.n()
                );
                warned = true;
            }
        }
    }

    /// Advance a single step.
    pub fn step(&mut self, save: bool) {
        self.run(1, save);
    }

    fn advance(&mut self) {
        step_into(
            &self.x,
            &self.a,
            self.params.r,
            self.params.alpha,
            &mut self.f_scratch,
            &mut self.next,
        );
        std::mem::swap(&mut self.x, &mut self.next);
        self.step_count += 1;
        self.current_recorded = false;
    }

    fn record_current(&mut self) {
        if self.current_recorded {
            return;
        }
        if let Some(t) = self.trajectory.as_mut() {
            t.record(&self.x);
            self.current_recorded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::mean;
    use crate::step::logistic_step;
    use logistic_types::LogisticError;

    fn fully_connected(n: usize) -> InteractionMatrix {
        InteractionMatrix::ones(n)
    }

    fn x0(n: usize) -> Vec<f64> {
        (0..n).map(|i| 0.05 + 0.9 * i as f64 / n as f64).collect()
    }

    #[test]
    fn test_diagonal_zeroed_at_construction() {
        let mut a = InteractionMatrix::ones(4);
        for i in 0..4 {
            a.set(i, i, 7.5);
        }
        let maps = LogisticMaps::new(x0(4), a, LogisticParams::default()).unwrap();
        assert!(maps.matrix().has_zero_diagonal());
        assert_eq!(maps.matrix().get(0, 1), 1.0);
    }

    #[test]
    fn test_dimension_mismatch_at_construction() {
        let err = LogisticMaps::new(x0(3), fully_connected(4), LogisticParams::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LogisticError::DimensionMismatch {
                state: 3,
                rows: 4,
                cols: 4
            }
        ));
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let a = InteractionMatrix::new(2, 3, vec![1.0; 6]).unwrap();
        assert!(LogisticMaps::new(x0(2), a, LogisticParams::default()).is_err());
    }

    #[test]
    fn test_trajectory_length() {
        let mut maps = LogisticMaps::new(x0(4), fully_connected(4), LogisticParams::default())
            .unwrap();
        maps.run(25, true);
        let t = maps.trajectory().unwrap();
        assert_eq!(t.len(), 26);
        assert_eq!(t.order().len(), 26);
        assert_eq!(t.variance().len(), 26);
        assert_eq!(t.dynamics()[0].len(), 26);
        assert_eq!(maps.step_count(), 25);
    }

    #[test]
    fn test_no_trajectory_without_save() {
        let mut maps = LogisticMaps::new(x0(4), fully_connected(4), LogisticParams::default())
            .unwrap();
        maps.run(25, false);
        assert!(maps.trajectory().is_none());
        assert_eq!(maps.step_count(), 25);
        assert!(maps.into_trajectory().is_none());
    }

    #[test]
    fn test_first_snapshot_is_initial_state() {
        let init = x0(3);
        let mut maps =
            LogisticMaps::new(init.clone(), fully_connected(3), LogisticParams::default())
                .unwrap();
        maps.run(2, true);
        assert_eq!(maps.trajectory().unwrap().snapshot(0).unwrap(), init.as_slice());
    }

    #[test]
    fn test_matches_pure_step() {
        let params = LogisticParams::new(3.85, 0.2);
        let mut a = fully_connected(5);
        let mut maps = LogisticMaps::new(x0(5), a.clone(), params).unwrap();
        maps.run(10, true);

        a.zero_diagonal();
        let mut x = x0(5);
        for _ in 0..10 {
            x = logistic_step(&x, &a, params.r, params.alpha).unwrap();
        }
        assert_eq!(maps.state(), x.as_slice());
        assert_eq!(maps.trajectory().unwrap().snapshot(10).unwrap(), x.as_slice());
    }

    #[test]
    fn test_bit_identical_reruns() {
        let params = LogisticParams::new(3.95, 0.4);
        let run = || {
            let mut maps = LogisticMaps::new(x0(8), fully_connected(8), params).unwrap();
            maps.run(200, true);
            maps.into_trajectory().unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.dynamics(), b.dynamics());
        assert_eq!(a.order(), b.order());
        assert_eq!(a.variance(), b.variance());
    }

    #[test]
    fn test_order_is_mean_of_snapshot() {
        let mut maps =
            LogisticMaps::new(x0(6), fully_connected(6), LogisticParams::new(3.7, 0.1)).unwrap();
        maps.run(50, true);
        let t = maps.trajectory().unwrap();
        for step in 0..t.len() {
            assert_eq!(t.order()[step], mean(t.snapshot(step).unwrap()));
        }
    }

    #[test]
    fn test_single_map_variance_zero() {
        let mut maps =
            LogisticMaps::new(vec![0.3], fully_connected(1), LogisticParams::new(3.9, 0.6))
                .unwrap();
        maps.run(100, true);
        assert!(maps.trajectory().unwrap().variance().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_continued_run_does_not_duplicate() {
        let mut maps = LogisticMaps::new(x0(3), fully_connected(3), LogisticParams::default())
            .unwrap();
        maps.run(4, true);
        maps.run(3, true);
        assert_eq!(maps.trajectory().unwrap().len(), 8);
        assert_eq!(maps.step_count(), 7);
    }

    #[test]
    fn test_single_step() {
        let mut maps = LogisticMaps::new(x0(2), fully_connected(2), LogisticParams::default())
            .unwrap();
        maps.step(true);
        assert_eq!(maps.trajectory().unwrap().len(), 2);
    }

    #[test]
    fn test_divergence_is_recorded_not_fatal() {
        // r far outside the domain sends the state to -inf, then NaN.
        let mut maps =
            LogisticMaps::new(vec![0.5, 0.6], fully_connected(2), LogisticParams::new(40.0, 0.1))
                .unwrap();
        maps.run(20, true);
        let t = maps.trajectory().unwrap();
        assert_eq!(t.len(), 21);
        assert!(t.first_non_finite_step().is_some());
    }

    #[test]
    fn test_out_of_domain_params_allowed() {
        let params = LogisticParams::new(5.0, 1.5);
        assert!(!params.check_domain());
        assert!(LogisticMaps::new(x0(2), fully_connected(2), params).is_ok());
    }

    #[test]
    fn test_quiet_construction_matches_new() {
        let params = LogisticParams::new(5.0, 1.5);
        let mut loud = LogisticMaps::new(x0(3), fully_connected(3), params).unwrap();
        let mut quiet = LogisticMaps::new_quiet(x0(3), fully_connected(3), params).unwrap();
        assert!(quiet.matrix().has_zero_diagonal());
        loud.run(5, true);
        quiet.run(5, true);
        assert_eq!(loud.state(), quiet.state());
        assert_eq!(
            loud.trajectory().unwrap().order(),
            quiet.trajectory().unwrap().order()
        );
        assert!(LogisticMaps::new_quiet(x0(3), fully_connected(2), params).is_err());
    }
}
