//! Named example games.
//!
//! The grids are fixed and already satisfy every matrix invariant, so these
//! constructors are infallible.

use crate::core::PayoffMatrix;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["classic", "dominant", "crossing"];

/// 3 × 3 game with maximin 2 and minimax 3, so no saddle point.
#[must_use]
pub fn classic() -> PayoffMatrix {
    PayoffMatrix::from_grid([
        [3.0, 2.0, 4.0],
        [1.0, 4.0, 2.0],
        [2.0, 3.0, 1.0],
    ])
}

/// 2 × 2 game with a single saddle point at (0, 0), value 2.
#[must_use]
pub fn dominant() -> PayoffMatrix {
    PayoffMatrix::from_grid([[2.0, 3.0], [1.0, 4.0]])
}

/// 2 × 2 game whose best replies cycle: maximin 3, minimax 4.
#[must_use]
pub fn crossing() -> PayoffMatrix {
    PayoffMatrix::from_grid([[4.0, 3.0], [2.0, 5.0]])
}

/// Look up an example by name.
///
/// Returns `None` for unknown names.
#[must_use]
pub fn by_name(name: &str) -> Option<PayoffMatrix> {
    match name {
        "classic" => Some(classic()),
        "dominant" => Some(dominant()),
        "crossing" => Some(crossing()),
        _ => None,
    }
}
