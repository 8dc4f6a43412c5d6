//! Problem validation and allocation checking.
//!
//! [`ProblemValidator`] decides whether the heuristics may run on a problem
//! (structure and balance) and verifies the allocations they return.

mod validator;
mod violation;

pub use validator::ProblemValidator;
pub use violation::{Violation, ViolationType};
