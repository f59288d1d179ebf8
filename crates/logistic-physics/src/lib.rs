// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Physics Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Coupled logistic maps: interaction topology, the one-step
//! recurrence, trajectory recording, and the simulation run that
//! drives them.
//!
//! # Invariants
//!
//! 1. **Zero diagonal**: a `LogisticMaps` never holds a matrix with a
//!    non-zero diagonal; construction normalises it.
//! 2. **Fixed size**: N is fixed for the lifetime of a run and checked
//!    against the matrix at construction, never lazily.
//! 3. **No clamping**: non-finite states propagate and are reported by
//!    the recorder, not hidden.

pub mod maps;
pub mod matrix;
pub mod recorder;
pub mod step;
pub mod topology;

pub use maps::{LogisticMaps, LogisticParams};
pub use matrix::InteractionMatrix;
pub use recorder::{Trajectory, TrajectorySummary};
pub use step::{logistic, logistic_step};
pub use topology::TopologyBuilder;
