//! Ready-made games.
//!
//! - `examples`: small named matrices with known answers
//! - `random`: seeded random matrices for property tests and benchmarks

pub mod examples;
pub mod random;

pub use random::RandomGameBuilder;
