//! Immutable rectangular payoff matrix.
//!
//! ## Layout
//!
//! Entries are stored row-major in a single `Vec<f64>`. Entry `(i, j)` is the
//! payoff to the row player when the row player picks strategy `i` and the
//! column player picks strategy `j`.
//!
//! ## Validation
//!
//! Every constructor (including deserialization) checks, in order:
//! at least two rows, equal row lengths, at least two columns, finite entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use super::error::{MatrixError, Result};

/// Validated payoff matrix of a two-player zero-sum game.
///
/// ```
/// use saddle_point::core::PayoffMatrix;
///
/// let m = PayoffMatrix::new(vec![vec![2.0, 3.0], vec![1.0, 4.0]]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 2);
/// assert_eq!(m[(1, 0)], 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PayoffMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl PayoffMatrix {
    /// Build a matrix from a sequence of rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        if row_count <= 1 {
            return Err(MatrixError::InvalidDimension {
                rows: row_count,
                cols: col_count,
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != col_count)
        {
            return Err(MatrixError::Ragged {
                row,
                expected: col_count,
                found,
            });
        }

        if col_count <= 1 {
            return Err(MatrixError::InvalidDimension {
                rows: row_count,
                cols: col_count,
            });
        }

        let data: Vec<f64> = rows.into_iter().flatten().collect();
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinite {
                row: pos / col_count,
                col: pos % col_count,
            });
        }

        Ok(Self {
            data,
            rows: row_count,
            cols: col_count,
        })
    }

    /// Build from a fixed grid whose shape and entries are known to be valid.
    ///
    /// Used for the built-in example games, which cannot fail validation.
    pub(crate) fn from_grid<const R: usize, const C: usize>(grid: [[f64; C]; R]) -> Self {
        debug_assert!(R > 1 && C > 1, "grid must be at least 2 × 2");
        debug_assert!(grid.iter().flatten().all(|v| v.is_finite()));
        Self {
            data: grid.iter().flatten().copied().collect(),
            rows: R,
            cols: C,
        }
    }

    /// Number of rows (row player strategies).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (column player strategies).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Entries of row `i`.
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {} out of bounds ({} rows)", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Entries of column `j`, top to bottom.
    ///
    /// Panics if `j` is out of bounds.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(j < self.cols, "column {} out of bounds ({} columns)", j, self.cols);
        self.data.iter().skip(j).step_by(self.cols).copied()
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for PayoffMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {} × {} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for PayoffMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<PayoffMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Bracketed grid with right-aligned columns:
///
/// ```text
/// [[3 2 4]
///  [1 4 2]
///  [2 3 1]]
/// ```
impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        for (i, row) in cells.chunks(self.cols).enumerate() {
            let open = if i == 0 { "[[" } else { " [" };
            write!(f, "{}", open)?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            if i + 1 == self.rows {
                write!(f, "]]")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        Ok(())
    }
}
