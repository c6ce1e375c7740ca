//! Errors raised while building a payoff matrix.

use thiserror::Error;

/// Result alias for matrix construction.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Reasons a payoff matrix is rejected at construction.
///
/// # Examples
/// ```
/// use saddle_point::core::MatrixError;
///
/// let err = MatrixError::InvalidDimension { rows: 1, cols: 3 };
/// assert_eq!(
///     err.to_string(),
///     "Matrix must have dimensions m × n where m > 1 and n > 1 (got 1 × 3)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Fewer than two rows or fewer than two columns.
    #[error("Matrix must have dimensions m × n where m > 1 and n > 1 (got {rows} × {cols})")]
    InvalidDimension {
        /// Row count of the rejected input.
        rows: usize,
        /// Column count of the rejected input.
        cols: usize,
    },

    /// Rows of differing lengths.
    #[error("Matrix rows must all have the same length: row {row} has {found} entries, expected {expected}")]
    Ragged {
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// An entry is NaN or infinite.
    #[error("Matrix entry at ({row}, {col}) is not a finite number")]
    NonFinite {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_message() {
        let err = MatrixError::Ragged { row: 2, expected: 3, found: 1 };
        assert_eq!(
            err.to_string(),
            "Matrix rows must all have the same length: row 2 has 1 entries, expected 3"
        );
    }

    #[test]
    fn test_non_finite_message() {
        let err = MatrixError::NonFinite { row: 0, col: 1 };
        assert_eq!(err.to_string(), "Matrix entry at (0, 1) is not a finite number");
    }
}
