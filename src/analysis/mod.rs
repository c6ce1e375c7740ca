//! Saddle point analysis.
//!
//! ## Usage
//!
//! ```rust
//! use saddle_point::analysis::PayoffAnalyzer;
//!
//! let game = PayoffAnalyzer::new(vec![
//!     vec![3.0, 2.0, 4.0],
//!     vec![1.0, 4.0, 2.0],
//!     vec![2.0, 3.0, 1.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(game.maximin(), 2.0);
//! assert_eq!(game.minimax(), 3.0);
//! assert!(game.find_saddle_points().is_empty());
//! assert!(game.analyze_game().contains("No saddle points found"));
//! ```

pub mod analyzer;
pub mod report;
pub mod saddle;

pub use analyzer::PayoffAnalyzer;
pub use report::GameAnalysis;
pub use saddle::SaddlePoint;
