//! North-West Corner rule.
//!
//! # Algorithm
//!
//! Two cursors start at the top-left ("north-west") cell. Each step ships
//! as much as possible through the current cell, then moves down when the
//! source is used up, right when the destination is satisfied, or
//! diagonally when both happen at once. Costs are ignored while choosing
//! cells, which makes the rule fast but usually expensive.
//!
//! # Complexity
//!
//! O(m + n) steps for m sources and n destinations.
//!
//! # Reference
//!
//! Charnes, A. & Cooper, W.W. (1954). "The Stepping Stone Method of
//! Explaining Linear Programming Calculations in Transportation Problems",
//! *Management Science* 1(1), 49-69.

use log::debug;

use super::state::working_tolerance;
use crate::config::SolverConfig;
use crate::models::{Allocation, Method, TransportationProblem};

/// Builds an initial allocation with the North-West Corner rule.
///
/// The problem should be balanced; see [`solve`](crate::solver::solve).
///
/// # Examples
///
/// ```
/// use u_transport::models::TransportationProblem;
/// use u_transport::constructive::north_west_corner;
/// use u_transport::SolverConfig;
///
/// let problem = TransportationProblem::new(
///     vec![20.0, 30.0],
///     vec![10.0, 40.0],
///     vec![vec![2.0, 3.0], vec![4.0, 1.0]],
/// ).unwrap();
///
/// let alloc = north_west_corner(&problem, &SolverConfig::default());
/// assert_eq!(alloc.to_rows(), vec![vec![10.0, 10.0], vec![0.0, 30.0]]);
/// assert_eq!(alloc.total_cost(), 80.0);
/// ```
pub fn north_west_corner(problem: &TransportationProblem, config: &SolverConfig) -> Allocation {
    let rows = problem.num_sources();
    let cols = problem.num_destinations();
    let tol = working_tolerance(problem, config.tolerance());
    let costs = problem.costs();

    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut allocation = Allocation::new(Method::NorthWest, rows, cols);

    let mut si = 0;
    let mut di = 0;
    while si < rows && di < cols {
        let s = supply[si];
        let d = demand[di];
        let quantity = s.min(d);
        allocation.assign(si, di, quantity, costs.get(si, di));
        debug!("north-west: ship {quantity} via ({si}, {di})");

        let delta = s - d;
        if delta < -tol {
            // Source exhausted, destination still short
            demand[di] -= s;
            si += 1;
        } else if delta > tol {
            // Destination satisfied, source has leftovers
            supply[si] -= d;
            di += 1;
        } else {
            si += 1;
            di += 1;
        }
    }

    allocation
}
