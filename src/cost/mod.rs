//! Unit-cost matrices.
//!
//! Provides a dense cost matrix indexed by (source, destination).

mod matrix;

pub use matrix::CostMatrix;
