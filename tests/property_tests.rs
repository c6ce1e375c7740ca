//! Property tests for the minimax bounds and saddle point enumeration.

use proptest::prelude::*;
use saddle_point::{MatrixError, PayoffAnalyzer, RandomGameBuilder};

/// Rectangular matrices of small integers, 2..6 on each side.
///
/// A narrow value range keeps ties (and therefore saddle points) common.
fn payoff_rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..6, 2usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop::collection::vec((-3i32..=3).prop_map(f64::from), cols),
            rows,
        )
    })
}

proptest! {
    #[test]
    fn maximin_never_exceeds_minimax(rows in payoff_rows()) {
        let game = PayoffAnalyzer::new(rows).unwrap();
        prop_assert!(game.maximin() <= game.minimax());
    }

    #[test]
    fn derived_lengths_match_shape(rows in payoff_rows()) {
        let (r, c) = (rows.len(), rows[0].len());
        let game = PayoffAnalyzer::new(rows).unwrap();
        prop_assert_eq!(game.row_minimums().len(), r);
        prop_assert_eq!(game.column_maximums().len(), c);
    }

    #[test]
    fn bounds_are_extremes_of_derived_sequences(rows in payoff_rows()) {
        let game = PayoffAnalyzer::new(rows).unwrap();
        let max_row_min = game.row_minimums().into_iter().fold(f64::NEG_INFINITY, f64::max);
        let min_col_max = game.column_maximums().into_iter().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(game.maximin(), max_row_min);
        prop_assert_eq!(game.minimax(), min_col_max);
    }

    #[test]
    fn saddle_points_exist_iff_bounds_meet(rows in payoff_rows()) {
        let game = PayoffAnalyzer::new(rows).unwrap();
        let points = game.find_saddle_points();

        if game.maximin() == game.minimax() {
            prop_assert!(!points.is_empty());
            for p in &points {
                prop_assert_eq!(p.value, game.maximin());
                prop_assert_eq!(p.value, game.minimax());
            }
        } else {
            prop_assert!(points.is_empty());
        }
    }

    #[test]
    fn saddle_points_are_row_minima_and_column_maxima(rows in payoff_rows()) {
        let game = PayoffAnalyzer::new(rows).unwrap();
        let matrix = game.matrix();
        for p in game.find_saddle_points() {
            prop_assert_eq!(matrix[(p.row, p.col)], p.value);
            prop_assert!(matrix.row(p.row).iter().all(|&v| v >= p.value));
            prop_assert!(matrix.column(p.col).all(|v| v <= p.value));
        }
    }

    #[test]
    fn saddle_points_are_row_major(rows in payoff_rows()) {
        let game = PayoffAnalyzer::new(rows).unwrap();
        let points = game.find_saddle_points();
        for pair in points.windows(2) {
            prop_assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }
    }

    #[test]
    fn report_branch_follows_saddle_points(rows in payoff_rows()) {
        let game = PayoffAnalyzer::new(rows).unwrap();
        let report = game.analyze_game();
        let count = game.find_saddle_points().len();

        if count == 0 {
            prop_assert!(report.contains("No saddle points found"));
            prop_assert!(!report.contains("This game has a pure strategy equilibrium."));
        } else {
            let header = format!("Found {} saddle point(s):", count);
            prop_assert!(report.contains(&header));
            prop_assert_eq!(report.matches("- Position").count(), count);
            prop_assert!(report.ends_with("This game has a pure strategy equilibrium."));
        }
    }

    #[test]
    fn random_games_satisfy_bounds(seed in any::<u64>(), r in 2usize..10, c in 2usize..10) {
        let matrix = RandomGameBuilder::new().rows(r).cols(c).payoff_range(-2, 2).build(seed).unwrap();
        let game = PayoffAnalyzer::from_matrix(matrix);
        prop_assert!(game.maximin() <= game.minimax());
        prop_assert_eq!(game.value().is_some(), game.has_pure_equilibrium());
    }

    #[test]
    fn degenerate_shapes_are_rejected(len in 0usize..6) {
        let row_vector = vec![vec![1.0; len]];
        let result = PayoffAnalyzer::new(row_vector);
        prop_assert!(
            matches!(result, Err(MatrixError::InvalidDimension { .. })),
            "1 × {} input accepted: {:?}", len, result
        );

        let column_vector = vec![vec![1.0]; len.max(2)];
        let result = PayoffAnalyzer::new(column_vector);
        prop_assert!(
            matches!(result, Err(MatrixError::InvalidDimension { .. })),
            "{} × 1 input accepted: {:?}", len.max(2), result
        );
    }

    #[test]
    fn ragged_rows_are_rejected(mut rows in payoff_rows(), which in any::<prop::sample::Index>()) {
        let i = 1 + which.index(rows.len() - 1);
        rows[i].push(0.0);
        prop_assert!(
            matches!(PayoffAnalyzer::new(rows), Err(MatrixError::Ragged { row, .. }) if row == i),
            "expected ragged error at row {}", i
        );
    }
}
