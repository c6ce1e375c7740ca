//! Structured analysis result and its text report.
//!
//! `GameAnalysis` is what the analyzer hands to consumers: the two bounds and
//! every saddle point. Its `Display` impl is the human-readable report; its
//! serde impls back the CLI's JSON output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::saddle::SaddlePoint;

/// Maximin, minimax and saddle points of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameAnalysis {
    /// Row player's guaranteed minimum.
    pub maximin: f64,
    /// Column player's guaranteed maximum loss.
    pub minimax: f64,
    /// All saddle points in row-major order.
    pub saddle_points: Vec<SaddlePoint>,
}

impl GameAnalysis {
    /// Whether the game has a pure strategy equilibrium.
    #[must_use]
    pub fn has_pure_equilibrium(&self) -> bool {
        !self.saddle_points.is_empty()
    }
}

impl fmt::Display for GameAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Analysis:")?;
        writeln!(f, "Maximin value (Player A's guaranteed minimum): {}", self.maximin)?;
        writeln!(f, "Minimax value (Player B's guaranteed maximum loss): {}", self.minimax)?;
        writeln!(f)?;

        if self.saddle_points.is_empty() {
            return write!(
                f,
                "No saddle points found - this game has no pure strategy equilibrium."
            );
        }

        writeln!(f, "Found {} saddle point(s):", self.saddle_points.len())?;
        for point in &self.saddle_points {
            writeln!(f, "- {}", point)?;
        }
        writeln!(f)?;
        write!(f, "This game has a pure strategy equilibrium.")
    }
}
