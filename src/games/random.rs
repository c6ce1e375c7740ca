//! Seeded random payoff matrices.
//!
//! Payoffs are integers drawn uniformly from an inclusive range and stored as
//! `f64`. Small ranges produce many ties, which exercises the multi-saddle
//! paths of the analyzer.
//!
//! ```
//! use saddle_point::games::RandomGameBuilder;
//!
//! let a = RandomGameBuilder::new().rows(4).cols(5).build(7).unwrap();
//! let b = RandomGameBuilder::new().rows(4).cols(5).build(7).unwrap();
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{PayoffMatrix, Result};

/// Builder for random games.
#[derive(Clone, Debug)]
pub struct RandomGameBuilder {
    rows: usize,
    cols: usize,
    min_payoff: i64,
    max_payoff: i64,
}

impl Default for RandomGameBuilder {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            min_payoff: -10,
            max_payoff: 10,
        }
    }
}

impl RandomGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Inclusive payoff range.
    pub fn payoff_range(mut self, min: i64, max: i64) -> Self {
        assert!(min <= max, "Payoff range must not be empty");
        self.min_payoff = min;
        self.max_payoff = max;
        self
    }

    /// Draw a matrix. The same seed always yields the same matrix.
    ///
    /// Fails if the configured shape is degenerate.
    pub fn build(&self, seed: u64) -> Result<PayoffMatrix> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let rows = (0..self.rows)
            .map(|_| {
                (0..self.cols)
                    .map(|_| rng.gen_range(self.min_payoff..=self.max_payoff) as f64)
                    .collect()
            })
            .collect();
        PayoffMatrix::new(rows)
    }
}
