//! # u-transport
//!
//! Transportation problem library computing initial basic feasible solutions
//! for balanced supply/demand problems with three classical heuristics.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (TransportationProblem, Allocation, Method)
//! - [`cost`]: Dense unit-cost matrix
//! - [`validation`]: Applicability and balance checks, allocation evaluation
//! - [`constructive`]: Constructive heuristics (North-West Corner, Vogel, Russell)
//! - [`solver`]: Validated entry points and side-by-side comparison
//! - [`generator`]: Random balanced instances
//!
//! Optimality improvement (stepping-stone, MODI) is out of scope.

pub mod config;
pub mod constructive;
pub mod cost;
pub mod error;
pub mod generator;
pub mod models;
pub mod solver;
pub mod validation;

pub use config::SolverConfig;
pub use error::{StructuralIssue, TransportError};
pub use solver::{compare, solve, Comparison};
