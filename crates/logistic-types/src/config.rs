// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LogisticError, LogisticResult};
use crate::run::{alpha_in_domain, r_in_domain, RunConfig};

/// Default control-parameter grid (all inside the chaotic regime).
pub const DEFAULT_R: [f64; 8] = [3.6, 3.65, 3.7, 3.75, 3.8, 3.85, 3.9, 3.95];
/// Default coupling-strength grid.
pub const DEFAULT_ALPHA: [f64; 6] = [0.05, 0.1, 0.2, 0.4, 0.6, 0.8];
/// Default map-count grid.
pub const DEFAULT_N: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];
/// Default step-count grid.
pub const DEFAULT_N_STEPS: [usize; 1] = [1000];

/// Interaction topology used to build each configuration's matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Topology {
    /// All-ones N×N (diagonal zeroed at run construction).
    #[default]
    FullyConnected,
    /// Each entry independently 1 with probability `p`.
    RandomBinary {
        #[serde(default = "Topology::default_p")]
        p: f64,
    },
    /// Each map coupled to its two nearest neighbours on a cycle.
    Ring,
}

impl Topology {
    fn default_p() -> f64 {
        0.5
    }
}

/// Candidate values for each sweep dimension.
///
/// Enumeration is the Cartesian product with `r` outermost and
/// `n_steps` innermost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    #[serde(default = "SweepGrid::default_r")]
    pub r_values: Vec<f64>,
    #[serde(default = "SweepGrid::default_alpha")]
    pub alpha_values: Vec<f64>,
    #[serde(default = "SweepGrid::default_n")]
    pub n_values: Vec<usize>,
    #[serde(default = "SweepGrid::default_n_steps")]
    pub n_steps_values: Vec<usize>,
}

impl SweepGrid {
    fn default_r() -> Vec<f64> {
        DEFAULT_R.to_vec()
    }
    fn default_alpha() -> Vec<f64> {
        DEFAULT_ALPHA.to_vec()
    }
    fn default_n() -> Vec<usize> {
        DEFAULT_N.to_vec()
    }
    fn default_n_steps() -> Vec<usize> {
        DEFAULT_N_STEPS.to_vec()
    }

    /// Number of configurations in the product. Zero if any axis is empty.
    pub fn len(&self) -> usize {
        self.r_values.len()
            * self.alpha_values.len()
            * self.n_values.len()
            * self.n_steps_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerate every configuration with a 1-based sequential index.
    pub fn configurations(&self) -> Vec<RunConfig> {
        let mut out = Vec::with_capacity(self.len());
        for &r in &self.r_values {
            for &alpha in &self.alpha_values {
                for &n in &self.n_values {
                    for &n_steps in &self.n_steps_values {
                        out.push(RunConfig {
                            idx: out.len() + 1,
                            r,
                            alpha,
                            n,
                            n_steps,
                        });
                    }
                }
            }
        }
        out
    }

    /// Total exported rows: Σ (n_steps + 1) over all configurations.
    pub fn total_rows(&self) -> usize {
        let per_pass: usize = self.n_steps_values.iter().map(|s| s + 1).sum();
        per_pass * self.r_values.len() * self.alpha_values.len() * self.n_values.len()
    }
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            r_values: Self::default_r(),
            alpha_values: Self::default_alpha(),
            n_values: Self::default_n(),
            n_steps_values: Self::default_n_steps(),
        }
    }
}

/// Runtime configuration for a parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub grid: SweepGrid,

    /// Worker pool size. Default: 4.
    #[serde(default = "SweepConfig::default_workers")]
    pub workers: usize,

    /// Base seed; each configuration derives its own stream from it.
    /// Default: 303.
    #[serde(default = "SweepConfig::default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub topology: Topology,
}

impl SweepConfig {
    fn default_workers() -> usize {
        4
    }
    fn default_seed() -> u64 {
        303
    }

    /// Validate configuration parameters.
    ///
    /// Out-of-domain r or alpha only warns: divergent regimes are
    /// legitimate subjects of a sweep.
    pub fn validate(&self) -> LogisticResult<()> {
        if self.workers == 0 {
            return Err(LogisticError::Config("workers must be >= 1".to_string()));
        }
        if self.grid.n_values.contains(&0) {
            return Err(LogisticError::Config(format!(
                "n_values must all be >= 1, got {:?}",
                self.grid.n_values
            )));
        }
        if let Topology::RandomBinary { p } = self.topology {
            if !(0.0..=1.0).contains(&p) {
                return Err(LogisticError::Config(format!(
                    "random_binary p must be in [0, 1], got {p}"
                )));
            }
        }
        for &r in &self.grid.r_values {
            if !r_in_domain(r) {
                log::warn!("r = {r} lies outside (0, 4]; trajectories may diverge");
            }
        }
        for &alpha in &self.grid.alpha_values {
            if !alpha_in_domain(alpha) {
                log::warn!("alpha = {alpha} lies outside [0, 1]");
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> LogisticResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LogisticError::Config(format!("JSON parse error: {e}")))
    }

    /// Load from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> LogisticResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LogisticError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> LogisticResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LogisticError::Config(format!("JSON encode error: {e}")))
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid: SweepGrid::default(),
            workers: Self::default_workers(),
            seed: Self::default_seed(),
            topology: Topology::default(),
        }
    }
}
