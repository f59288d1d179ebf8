// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Interaction Matrix
// ─────────────────────────────────────────────────────────────────────
//! Dense N×N interaction matrix, row-major.
//!
//! Row i lists the weights with which every map feeds map i, so the
//! coupling term for map i is Σ_j A_ij f(x_j).

use logistic_types::{LogisticError, LogisticResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl InteractionMatrix {
    /// Wrap row-major data. Fails if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> LogisticResult<Self> {
        if data.len() != rows * cols {
            return Err(LogisticError::Matrix(format!(
                "expected {rows}x{cols} = {} entries, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: &[Vec<f64>]) -> LogisticResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(LogisticError::Matrix(format!(
                    "row {i} has {} entries, expected {n_cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// All-ones N×N (fully connected, diagonal still set).
    pub fn ones(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            data: vec![1.0; n * n],
        }
    }

    pub fn zeros(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            data: vec![0.0; n * n],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    /// Row i as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Force A_ii = 0 for every i on the main diagonal.
    pub fn zero_diagonal(&mut self) {
        for i in 0..self.rows.min(self.cols) {
            self.data[i * self.cols + i] = 0.0;
        }
    }

    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.rows.min(self.cols)).all(|i| self.get(i, i) == 0.0)
    }

    /// Number of non-zero entries in row i (in-degree of map i).
    pub fn degree(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&w| w != 0.0).count()
    }

    /// y = A · x. Caller guarantees `x.len() == cols` and `out.len() == rows`.
    #[inline]
    pub(crate) fn mul_vec_into(&self, x: &[f64], out: &mut [f64]) {
        for (i, y) in out.iter_mut().enumerate() {
            *y = self
                .row(i)
                .iter()
                .zip(x.iter())
                .map(|(a, b)| a * b)
                .sum();
        }
    }
}
