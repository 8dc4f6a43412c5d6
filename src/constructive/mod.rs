//! Constructive heuristics for initial basic feasible solutions.
//!
//! - [`north_west_corner`]: North-West Corner rule, O(m + n)
//! - [`vogel_approximation`]: Vogel's Approximation Method (1958), O((m + n)·m·n)
//! - [`russell_approximation`]: Russell's Approximation Method (1969), O((m + n)·m·n)
//!
//! Each heuristic copies supply and demand into its own working state, so
//! the problem is never mutated and the heuristics can run side by side on
//! the same instance.

mod north_west;
mod russell;
mod state;
mod vogel;

pub use north_west::north_west_corner;
pub use russell::russell_approximation;
pub use vogel::vogel_approximation;
