// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Logistic Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all logistic-kernel failures.
#[derive(Error, Debug)]
pub enum LogisticError {
    /// State vector length disagrees with the interaction matrix shape.
    #[error("dimension mismatch: state has {state} maps, matrix is {rows}x{cols}")]
    DimensionMismatch {
        state: usize,
        rows: usize,
        cols: usize,
    },

    /// Malformed matrix construction (ragged rows, bad data length).
    #[error("matrix error: {0}")]
    Matrix(String),

    /// Invalid input (parameters, worker counts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Numerical error (NaN/Inf in the recorded state).
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Export or config file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LogisticResult<T> = Result<T, LogisticError>;
