//! Domain model types for transportation problems.
//!
//! Provides the problem instance (supplies, demands, unit costs), the
//! allocation grid each heuristic produces, and the heuristic selector.

mod allocation;
mod method;
mod problem;

pub use allocation::Allocation;
pub use method::Method;
pub use problem::TransportationProblem;
