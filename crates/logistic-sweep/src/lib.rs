// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Sweep Harness
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Cartesian parameter sweeps over coupled logistic maps.
//!
//! Each configuration is an independent run on a bounded rayon pool.
//! Runs share no mutable state: every configuration owns its state
//! vector, matrix, recorder, and RNG stream. The only shared object is
//! the progress counter.
//!
//! # Reproducibility
//!
//! Configuration `idx` draws from `StdRng::seed_from_u64(config_seed(seed, idx))`.
//! Output is therefore bit-identical for any worker count and any
//! completion order, and the report is always ordered by `idx`.

pub mod harness;
pub mod progress;
pub mod table;

pub use harness::{
    config_seed, run_configuration, ConfigOutcome, ConfigRows, SweepHarness, SweepReport,
};
pub use progress::ProgressReporter;
pub use table::{write_tsv, write_tsv_file};
