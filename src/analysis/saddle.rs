//! Saddle point record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A matrix position that is both the minimum of its row and the maximum of
/// its column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaddlePoint {
    /// Row index (row player strategy).
    pub row: usize,
    /// Column index (column player strategy).
    pub col: usize,
    /// Payoff at the position.
    pub value: f64,
}

impl SaddlePoint {
    /// Create a new saddle point record.
    #[must_use]
    pub const fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }
}

impl fmt::Display for SaddlePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position ({}, {}) with value {}", self.row, self.col, self.value)
    }
}
