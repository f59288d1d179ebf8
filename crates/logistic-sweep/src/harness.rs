// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sweep Harness
// ─────────────────────────────────────────────────────────────────────
//! Enumerate the grid, run one `LogisticMaps` per configuration on a
//! bounded worker pool, and flatten the trajectories into result rows.
//!
//! A failing configuration (e.g. a topology builder returning the
//! wrong shape) yields an error outcome; the rest of the sweep runs.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use logistic_physics::{LogisticMaps, LogisticParams, TopologyBuilder, TrajectorySummary};
use logistic_types::{
    LogisticError, LogisticResult, ResultRow, RunConfig, SweepConfig, SweepGrid, Topology,
};

use crate::progress::ProgressReporter;

/// Per-configuration seed: splitmix64 over (base seed, idx).
pub fn config_seed(base: u64, idx: usize) -> u64 {
    let mut z = base.wrapping_add((idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Rows produced by one successful configuration.
#[derive(Debug, Clone)]
pub struct ConfigRows {
    /// One row per step, in time order.
    pub rows: Vec<ResultRow>,
    pub summary: TrajectorySummary,
    /// First step at which the state went NaN/Inf, if any.
    pub first_non_finite: Option<usize>,
}

/// Result of one configuration: its rows, or why it failed.
#[derive(Debug)]
pub struct ConfigOutcome {
    pub config: RunConfig,
    pub result: LogisticResult<ConfigRows>,
}

impl ConfigOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregated sweep output, ordered by configuration index.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub outcomes: Vec<ConfigOutcome>,
    pub elapsed_ms: f64,
}

impl SweepReport {
    /// All rows of all successful configurations, concatenated.
    pub fn rows(&self) -> Vec<ResultRow> {
        let mut out = Vec::with_capacity(self.row_count());
        for outcome in &self.outcomes {
            if let Ok(rows) = &outcome.result {
                out.extend_from_slice(&rows.rows);
            }
        }
        out
    }

    pub fn row_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|r| r.rows.len())
            .sum()
    }

    /// Failed configurations with their errors.
    pub fn failures(&self) -> Vec<(&RunConfig, &LogisticError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.config, e)))
            .collect()
    }

    /// Indices of configurations whose state went non-finite.
    pub fn non_finite_configs(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(r) if r.first_non_finite.is_some()))
            .map(|o| o.config.idx)
            .collect()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Trajectory summaries of the successful configurations, by idx.
    pub fn summaries(&self) -> Vec<(usize, TrajectorySummary)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.config.idx, r.summary)))
            .collect()
    }
}

/// Run a single configuration with its own RNG stream.
///
/// Draw order: N uniform [0, 1) initial states, then the topology.
/// A configuration with no maps has no row to emit and is an error.
pub fn run_configuration(
    config: &RunConfig,
    topology: &dyn TopologyBuilder,
    rng: &mut StdRng,
) -> LogisticResult<ConfigRows> {
    if config.n == 0 {
        return Err(LogisticError::Validation(format!(
            "configuration {} has no maps",
            config.idx
        )));
    }
    let x0: Vec<f64> = (0..config.n).map(|_| rng.gen::<f64>()).collect();
    let a = topology.build(config.n, rng);
    // Domain warnings were already issued once by `SweepConfig::validate`.
    let mut maps = LogisticMaps::new_quiet(x0, a, LogisticParams::new(config.r, config.alpha))?;
    maps.run(config.n_steps, true);

    let trajectory = maps.into_trajectory().ok_or_else(|| {
        LogisticError::Validation(format!("configuration {} recorded no steps", config.idx))
    })?;

    let rows: Vec<ResultRow> = trajectory
        .map_series(0)
        .zip(trajectory.order().iter())
        .zip(trajectory.variance().iter())
        .map(|((x_i, &order), &var)| ResultRow::new(config, x_i, order, var))
        .collect();

    Ok(ConfigRows {
        rows,
        summary: trajectory.summary(),
        first_non_finite: trajectory.first_non_finite_step(),
    })
}

/// Bounded-pool executor for a parameter grid.
pub struct SweepHarness {
    grid: SweepGrid,
    workers: usize,
    seed: u64,
    topology: Box<dyn TopologyBuilder>,
}

impl SweepHarness {
    /// Build from a validated config.
    pub fn from_config(config: &SweepConfig) -> LogisticResult<Self> {
        config.validate()?;
        Ok(Self {
            grid: config.grid.clone(),
            workers: config.workers,
            seed: config.seed,
            topology: Box::new(config.topology),
        })
    }

    pub fn new(grid: SweepGrid, workers: usize, seed: u64) -> LogisticResult<Self> {
        if workers == 0 {
            return Err(LogisticError::Validation("workers must be >= 1".to_string()));
        }
        Ok(Self {
            grid,
            workers,
            seed,
            topology: Box::new(Topology::FullyConnected),
        })
    }

    /// Replace the topology with any custom builder.
    pub fn with_topology(mut self, topology: impl TopologyBuilder + 'static) -> Self {
        self.topology = Box::new(topology);
        self
    }

    /// Run every configuration. Only pool construction can fail here;
    /// per-configuration errors land in the report.
    pub fn run(&self) -> LogisticResult<SweepReport> {
        let configs = self.grid.configurations();
        if configs.is_empty() {
            log::info!("sweep grid is empty; nothing to run");
            return Ok(SweepReport::default());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("logistic-sweep-{i}"))
            .build()
            .map_err(|e| LogisticError::Config(format!("worker pool: {e}")))?;

        log::info!(
            "sweep start: {} configurations, {} rows, {} workers",
            configs.len(),
            self.grid.total_rows(),
            self.workers
        );
        let progress = ProgressReporter::new(configs.len());
        let start = Instant::now();

        let topology = self.topology.as_ref();
        let outcomes: Vec<ConfigOutcome> = pool.install(|| {
            configs
                .par_iter()
                .map(|config| {
                    let mut rng = StdRng::seed_from_u64(config_seed(self.seed, config.idx));
                    let result = run_configuration(config, topology, &mut rng);
                    if let Err(e) = &result {
                        log::warn!("configuration {} failed: {e}", config.idx);
                    }
                    progress.tick();
                    ConfigOutcome {
                        config: *config,
                        result,
                    }
                })
                .collect()
        });

        let report = SweepReport {
            outcomes,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        log::info!(
            "sweep done: {}/{} configurations ok, {} rows in {:.1} ms",
            report.succeeded(),
            report.outcomes.len(),
            report.row_count(),
            report.elapsed_ms
        );
        Ok(report)
    }
}
