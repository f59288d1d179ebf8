// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, sweep configuration, and error hierarchy for the
//! coupled logistic-map kernel.

pub mod config;
pub mod error;
pub mod run;

pub use config::{SweepConfig, SweepGrid, Topology};
pub use error::{LogisticError, LogisticResult};
pub use run::{ResultRow, RunConfig};
