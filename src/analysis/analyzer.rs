//! Pure-strategy analysis of a zero-sum payoff matrix.
//!
//! The row player maximizes, the column player minimizes. Every query scans
//! the matrix afresh; nothing is cached because the matrix never changes.
//!
//! ## Exact comparison
//!
//! Saddle point detection compares `f64` values with `==`, without tolerance.
//! Payoffs that differ only by rounding error are treated as different.

use tracing::{debug, trace};

use super::report::GameAnalysis;
use super::saddle::SaddlePoint;
use crate::core::{PayoffMatrix, Result};

/// Query operations over one immutable payoff matrix.
///
/// ```
/// use saddle_point::PayoffAnalyzer;
///
/// let game = PayoffAnalyzer::new(vec![vec![2.0, 3.0], vec![1.0, 4.0]]).unwrap();
/// assert_eq!(game.maximin(), 2.0);
/// assert_eq!(game.minimax(), 2.0);
///
/// let points = game.find_saddle_points();
/// assert_eq!(points.len(), 1);
/// assert_eq!((points[0].row, points[0].col), (0, 0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffAnalyzer {
    matrix: PayoffMatrix,
}

impl PayoffAnalyzer {
    /// Validate `rows` and build an analyzer over them.
    ///
    /// Fails when there are fewer than two rows or columns, when rows differ
    /// in length, or when an entry is NaN or infinite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let matrix = PayoffMatrix::new(rows)?;
        Ok(Self::from_matrix(matrix))
    }

    /// Build an analyzer over an already validated matrix.
    #[must_use]
    pub fn from_matrix(matrix: PayoffMatrix) -> Self {
        debug!(rows = matrix.rows(), cols = matrix.cols(), "payoff analyzer created");
        Self { matrix }
    }

    /// The analyzed matrix.
    #[must_use]
    pub fn matrix(&self) -> &PayoffMatrix {
        &self.matrix
    }

    /// Minimum of each row, one entry per row.
    #[must_use]
    pub fn row_minimums(&self) -> Vec<f64> {
        self.matrix
            .iter_rows()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// Maximum of each column, one entry per column.
    #[must_use]
    pub fn column_maximums(&self) -> Vec<f64> {
        (0..self.matrix.cols())
            .map(|j| self.matrix.column(j).fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    /// Largest row minimum: what the row player can guarantee with one row.
    #[must_use]
    pub fn maximin(&self) -> f64 {
        self.row_minimums()
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest column maximum: the loss bound the column player can
    /// guarantee with one column.
    #[must_use]
    pub fn minimax(&self) -> f64 {
        self.column_maximums()
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    /// Game value when maximin and minimax coincide.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let maximin = self.maximin();
        (maximin == self.minimax()).then_some(maximin)
    }

    /// Every position that is both its row's minimum and its column's
    /// maximum, in row-major order.
    ///
    /// Returns an empty list without scanning positions when maximin and
    /// minimax differ.
    #[must_use]
    pub fn find_saddle_points(&self) -> Vec<SaddlePoint> {
        let row_mins = self.row_minimums();
        let col_maxs = self.column_maximums();

        let maximin = row_mins.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let minimax = col_maxs.iter().copied().fold(f64::INFINITY, f64::min);

        if maximin != minimax {
            debug!(maximin, minimax, "bounds differ, no saddle point");
            return Vec::new();
        }

        let mut points = Vec::new();
        for (i, row) in self.matrix.iter_rows().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                // A row may hit its minimum in several columns; only those
                // that also top their column count.
                if value == row_mins[i] && value == col_maxs[j] {
                    trace!(row = i, col = j, value, "saddle point");
                    points.push(SaddlePoint::new(i, j, value));
                }
            }
        }

        debug!(count = points.len(), value = maximin, "saddle points found");
        points
    }

    /// Whether any saddle point exists.
    #[must_use]
    pub fn has_pure_equilibrium(&self) -> bool {
        !self.find_saddle_points().is_empty()
    }

    /// Bounds and saddle points as one record.
    #[must_use]
    pub fn analysis(&self) -> GameAnalysis {
        GameAnalysis {
            maximin: self.maximin(),
            minimax: self.minimax(),
            saddle_points: self.find_saddle_points(),
        }
    }

    /// Human-readable report of the analysis.
    #[must_use]
    pub fn analyze_game(&self) -> String {
        self.analysis().to_string()
    }
}

impl From<PayoffMatrix> for PayoffAnalyzer {
    fn from(matrix: PayoffMatrix) -> Self {
        Self::from_matrix(matrix)
    }
}
