//! Core types: the validated payoff matrix and its construction errors.
//!
//! Everything else in the crate reads a `PayoffMatrix`; nothing mutates one.

pub mod error;
pub mod matrix;

pub use error::{MatrixError, Result};
pub use matrix::PayoffMatrix;
