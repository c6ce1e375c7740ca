//! # saddle-point
//!
//! Pure-strategy analysis of two-player zero-sum matrix games.
//!
//! Given a payoff matrix (row player's payoff for each pair of strategies),
//! the crate computes row minimums, column maximums, the maximin and minimax
//! bounds, and every saddle point: a position that is the minimum of its row
//! and the maximum of its column. A saddle point exists exactly when the two
//! bounds meet, and the game then has a pure strategy equilibrium.
//!
//! ## Modules
//!
//! - `core`: validated `PayoffMatrix` and `MatrixError`
//! - `analysis`: `PayoffAnalyzer`, `SaddlePoint`, `GameAnalysis`
//! - `games`: named example games and a seeded random game builder
//!
//! Mixed strategies are out of scope.

pub mod core;
pub mod analysis;
pub mod games;

// Re-export commonly used types
pub use crate::core::{MatrixError, PayoffMatrix, Result};

pub use crate::analysis::{GameAnalysis, PayoffAnalyzer, SaddlePoint};

pub use crate::games::RandomGameBuilder;
