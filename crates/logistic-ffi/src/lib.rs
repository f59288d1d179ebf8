// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Kernel PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied: PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the coupled logistic-map kernel.
//!
//! Exposes `LogisticMaps`, `SweepConfig`, and `run_sweep` via PyO3.
//!
//! # FFI Safety
//!
//! - Kernel errors → `ValueError` (dimension mismatch, bad config).
//! - The GIL is released for the duration of a sweep.
//! - All config validated before a sweep starts.
//!
//! Install: `pip install -e crates/logistic-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from logistic_kernel import LogisticMaps, SweepConfig, run_sweep
//!
//! lm = LogisticMaps([0.2, 0.7], [[1, 1], [1, 1]], r=3.8, alpha=0.1)
//! lm.run(n=100, save=True)
//! table = run_sweep(SweepConfig(r_values=[3.6], n_steps_values=[50]))
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use logistic_physics::{InteractionMatrix, LogisticMaps, LogisticParams};
use logistic_sweep::SweepHarness;
use logistic_types::{LogisticError, SweepConfig, SweepGrid, Topology};

fn value_err(e: LogisticError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse_topology(name: &str, edge_prob: f64) -> PyResult<Topology> {
    match name {
        "fully_connected" => Ok(Topology::FullyConnected),
        "random_binary" => Ok(Topology::RandomBinary { p: edge_prob }),
        "ring" => Ok(Topology::Ring),
        other => Err(PyValueError::new_err(format!(
            "unknown topology '{other}', expected fully_connected | random_binary | ring"
        ))),
    }
}

// ─── PyLogisticMaps ─────────────────────────────────────────────────

/// System of coupled logistic maps.
#[pyclass(name = "LogisticMaps")]
struct PyLogisticMaps {
    inner: LogisticMaps,
}

#[pymethods]
impl PyLogisticMaps {
    /// `a` is an N×N adjacency; its diagonal is zeroed.
    #[new]
    #[pyo3(signature = (x0, a, r = 3.6, alpha = 0.3))]
    fn new(x0: Vec<f64>, a: Vec<Vec<f64>>, r: f64, alpha: f64) -> PyResult<Self> {
        let matrix = InteractionMatrix::from_rows(&a).map_err(value_err)?;
        let inner =
            LogisticMaps::new(x0, matrix, LogisticParams::new(r, alpha)).map_err(value_err)?;
        Ok(Self { inner })
    }

    /// Run for `n` steps, saving dynamics when `save` is true.
    #[pyo3(signature = (n = 1, save = true))]
    fn run(&mut self, n: usize, save: bool) {
        self.inner.run(n, save);
    }

    #[getter(N)]
    fn n(&self) -> usize {
        self.inner.n()
    }

    #[getter]
    fn r(&self) -> f64 {
        self.inner.params().r
    }

    #[getter]
    fn alpha(&self) -> f64 {
        self.inner.params().alpha
    }

    /// Current state vector.
    #[getter(X)]
    fn state(&self) -> Vec<f64> {
        self.inner.state().to_vec()
    }

    /// Normalised adjacency (zero diagonal), as nested rows.
    #[getter(A)]
    fn adjacency(&self) -> Vec<Vec<f64>> {
        let a = self.inner.matrix();
        (0..a.rows()).map(|i| a.row(i).to_vec()).collect()
    }

    #[getter]
    fn step_count(&self) -> usize {
        self.inner.step_count()
    }

    /// N rows × T columns; `None` if nothing was saved.
    #[getter]
    fn dynamics(&self) -> Option<Vec<Vec<f64>>> {
        self.inner.trajectory().map(|t| t.dynamics())
    }

    #[getter]
    fn order(&self) -> Option<Vec<f64>> {
        self.inner.trajectory().map(|t| t.order().to_vec())
    }

    #[getter]
    fn var(&self) -> Option<Vec<f64>> {
        self.inner.trajectory().map(|t| t.variance().to_vec())
    }

    /// First saved step with a NaN/Inf state, if any.
    fn first_non_finite_step(&self) -> Option<usize> {
        self.inner
            .trajectory()
            .and_then(|t| t.first_non_finite_step())
    }

    fn __repr__(&self) -> String {
        let p = self.inner.params();
        format!(
            "LogisticMaps(N={}, r={}, alpha={}, steps={})",
            self.inner.n(),
            p.r,
            p.alpha,
            self.inner.step_count()
        )
    }
}

// ─── PySweepConfig ──────────────────────────────────────────────────

/// Python-visible sweep configuration.
#[pyclass(name = "SweepConfig")]
#[derive(Clone)]
struct PySweepConfig {
    inner: SweepConfig,
}

#[pymethods]
impl PySweepConfig {
    #[new]
    #[pyo3(signature = (
        r_values = None,
        alpha_values = None,
        n_values = None,
        n_steps_values = None,
        workers = 4,
        seed = 303,
        topology = "fully_connected",
        edge_prob = 0.5,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        r_values: Option<Vec<f64>>,
        alpha_values: Option<Vec<f64>>,
        n_values: Option<Vec<usize>>,
        n_steps_values: Option<Vec<usize>>,
        workers: usize,
        seed: u64,
        topology: &str,
        edge_prob: f64,
    ) -> PyResult<Self> {
        let defaults = SweepGrid::default();
        let config = SweepConfig {
            grid: SweepGrid {
                r_values: r_values.unwrap_or(defaults.r_values),
                alpha_values: alpha_values.unwrap_or(defaults.alpha_values),
                n_values: n_values.unwrap_or(defaults.n_values),
                n_steps_values: n_steps_values.unwrap_or(defaults.n_steps_values),
            },
            workers,
            seed,
            topology: parse_topology(topology, edge_prob)?,
        };
        config.validate().map_err(value_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = SweepConfig::from_json(json).map_err(value_err)?;
        config.validate().map_err(value_err)?;
        Ok(Self { inner: config })
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(value_err)
    }

    /// Number of configurations in the grid.
    fn __len__(&self) -> usize {
        self.inner.grid.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SweepConfig(configs={}, workers={}, seed={}, topology={:?})",
            self.inner.grid.len(),
            self.inner.workers,
            self.inner.seed,
            self.inner.topology
        )
    }
}

// ─── run_sweep ──────────────────────────────────────────────────────

/// Run a sweep and return its table as a dict of column lists.
///
/// Keys: idx, n, r, alpha, n_steps, x_i, order, var, plus `failures`
/// (list of `(idx, message)`) and `non_finite` (list of idx).
#[pyfunction]
#[pyo3(signature = (config = None))]
fn run_sweep<'py>(
    py: Python<'py>,
    config: Option<PyRef<'py, PySweepConfig>>,
) -> PyResult<Bound<'py, PyDict>> {
    let config = config.map(|c| c.inner.clone()).unwrap_or_default();
    let harness = SweepHarness::from_config(&config).map_err(value_err)?;
    let report = py.allow_threads(|| harness.run()).map_err(value_err)?;
    let rows = report.rows();

    let dict = PyDict::new(py);
    dict.set_item("idx", rows.iter().map(|r| r.idx).collect::<Vec<_>>())?;
    dict.set_item("n", rows.iter().map(|r| r.n).collect::<Vec<_>>())?;
    dict.set_item("r", rows.iter().map(|r| r.r).collect::<Vec<_>>())?;
    dict.set_item("alpha", rows.iter().map(|r| r.alpha).collect::<Vec<_>>())?;
    dict.set_item("n_steps", rows.iter().map(|r| r.n_steps).collect::<Vec<_>>())?;
    dict.set_item("x_i", rows.iter().map(|r| r.x_i).collect::<Vec<_>>())?;
    dict.set_item("order", rows.iter().map(|r| r.order).collect::<Vec<_>>())?;
    dict.set_item("var", rows.iter().map(|r| r.var).collect::<Vec<_>>())?;
    let failures: Vec<(usize, String)> = report
        .failures()
        .into_iter()
        .map(|(cfg, err)| (cfg.idx, err.to_string()))
        .collect();
    dict.set_item("failures", failures)?;
    dict.set_item("non_finite", report.non_finite_configs())?;
    // idx -> (mean order, mean variance, final order)
    let summaries = PyDict::new(py);
    for (idx, summary) in report.summaries() {
        summaries.set_item(
            idx,
            (summary.mean_order, summary.mean_variance, summary.final_order),
        )?;
    }
    dict.set_item("summaries", summaries)?;
    Ok(dict)
}

// ─── Module ─────────────────────────────────────────────────────────

/// Coupled logistic-map kernel.
///
/// - `LogisticMaps`: single simulation run
/// - `SweepConfig`: sweep grid and execution settings
/// - `run_sweep`: parallel sweep returning a column dict
#[pymodule]
fn logistic_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLogisticMaps>()?;
    m.add_class::<PySweepConfig>()?;
    m.add_function(wrap_pyfunction!(run_sweep, m)?)?;
    Ok(())
}
