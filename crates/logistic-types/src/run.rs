// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Kernel Run Types
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Nominal domain of the control parameter r: (0, 4].
#[inline]
pub fn r_in_domain(r: f64) -> bool {
    r > 0.0 && r <= 4.0
}

/// Nominal domain of the coupling strength alpha: [0, 1].
#[inline]
pub fn alpha_in_domain(alpha: f64) -> bool {
    (0.0..=1.0).contains(&alpha)
}

/// One point in the sweep. Immutable once enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// 1-based index in enumeration order.
    pub idx: usize,
    pub r: f64,
    pub alpha: f64,
    /// Number of coupled maps.
    pub n: usize,
    pub n_steps: usize,
}

impl RunConfig {
    /// Rows this configuration contributes to the output table.
    pub fn row_count(&self) -> usize {
        self.n_steps + 1
    }
}

/// One time step of one configuration, as exported to the table.
///
/// Column order matches the TSV header:
/// `idx n r alpha n_steps x_i order var`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub idx: usize,
    pub n: usize,
    pub r: f64,
    pub alpha: f64,
    pub n_steps: usize,
    /// Driving map (index 0) state at this step.
    pub x_i: f64,
    /// Mean state across all maps.
    pub order: f64,
    /// Sample variance across maps (0 when n = 1).
    pub var: f64,
}

impl ResultRow {
    pub const HEADER: [&'static str; 8] =
        ["idx", "n", "r", "alpha", "n_steps", "x_i", "order", "var"];

    pub fn new(config: &RunConfig, x_i: f64, order: f64, var: f64) -> Self {
        Self {
            idx: config.idx,
            n: config.n,
            r: config.r,
            alpha: config.alpha,
            n_steps: config.n_steps,
            x_i,
            order,
            var,
        }
    }
}
