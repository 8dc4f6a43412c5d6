//! Heuristic selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::constructive::{north_west_corner, russell_approximation, vogel_approximation};
use crate::error::TransportError;

use super::{Allocation, TransportationProblem};

/// An initial basic feasible solution heuristic.
///
/// # Examples
///
/// ```
/// use u_transport::models::{Method, TransportationProblem};
/// use u_transport::SolverConfig;
///
/// let problem = TransportationProblem::new(
///     vec![20.0, 30.0],
///     vec![10.0, 40.0],
///     vec![vec![2.0, 3.0], vec![4.0, 1.0]],
/// ).unwrap();
///
/// let allocation = Method::NorthWest.run(&problem, &SolverConfig::default()).unwrap();
/// assert_eq!(allocation.total_cost(), 80.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// North-West Corner rule.
    NorthWest,
    /// Vogel's Approximation Method.
    Vogel,
    /// Russell's Approximation Method.
    Russell,
}

impl Method {
    /// Every method, in presentation order.
    pub const ALL: [Method; 3] = [Method::NorthWest, Method::Vogel, Method::Russell];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::NorthWest => "North-West Corner",
            Method::Vogel => "Vogel's Approximation",
            Method::Russell => "Russell's Approximation",
        }
    }

    /// Runs this heuristic on `problem`.
    ///
    /// Balance is not checked here; use [`solve`](crate::solver::solve) to
    /// validate first.
    pub fn run(
        &self,
        problem: &TransportationProblem,
        config: &SolverConfig,
    ) -> Result<Allocation, TransportError> {
        match self {
            Method::NorthWest => Ok(north_west_corner(problem, config)),
            Method::Vogel => vogel_approximation(problem, config),
            Method::Russell => russell_approximation(problem, config),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
