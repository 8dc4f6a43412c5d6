//! Russell's Approximation Method.
//!
//! # Algorithm
//!
//! Each iteration computes, over the cells whose row still has supply and
//! whose column still has demand, the largest unit cost `u_i` in every row
//! and `v_j` in every column. The adjusted cost
//!
//! ```text
//! c'(i, j) = c(i, j) - u_i - v_j
//! ```
//!
//! estimates how much shipping through `(i, j)` saves relative to the most
//! expensive alternatives. The eligible cell with the most negative adjusted
//! cost (first in row-major order on ties) receives as much as supply and
//! demand allow, at its original unit cost. Adjusted costs are recomputed
//! from the original matrix every iteration.
//!
//! # Complexity
//!
//! O((m + n) · m · n) for m sources and n destinations.
//!
//! # Reference
//!
//! Russell, E.J. (1969). "Extension of Dantzig's Algorithm to Finding an
//! Initial Near-Optimal Basis for the Transportation Problem",
//! *Operations Research* 17(1), 187-191.

use log::{debug, trace};

use crate::config::SolverConfig;
use crate::cost::CostMatrix;
use crate::error::TransportError;
use crate::models::{Allocation, Method, TransportationProblem};

use super::state::Remaining;

/// Builds an initial allocation with Russell's Approximation Method.
///
/// The problem should be balanced; see [`solve`](crate::solver::solve).
///
/// # Errors
///
/// Returns [`TransportError::DegenerateState`] if supply and demand both
/// remain but no cell is eligible.
///
/// # Examples
///
/// ```
/// use u_transport::models::TransportationProblem;
/// use u_transport::constructive::russell_approximation;
/// use u_transport::SolverConfig;
///
/// let problem = TransportationProblem::new(
///     vec![15.0, 5.0],
///     vec![10.0, 10.0],
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
/// ).unwrap();
///
/// let alloc = russell_approximation(&problem, &SolverConfig::default()).unwrap();
/// assert_eq!(alloc.to_rows(), vec![vec![10.0, 5.0], vec![0.0, 5.0]]);
/// assert_eq!(alloc.total_cost(), 40.0);
/// ```
pub fn russell_approximation(
    problem: &TransportationProblem,
    config: &SolverConfig,
) -> Result<Allocation, TransportError> {
    let rows = problem.num_sources();
    let cols = problem.num_destinations();
    let costs = problem.costs();

    let mut remaining = Remaining::for_problem(problem, config.tolerance());
    let mut allocation = Allocation::new(Method::Russell, rows, cols);

    while !remaining.is_done() {
        let adjusted = adjusted_costs(costs, &remaining);
        trace!("russell: adjusted costs {:?}", adjusted.as_slice());

        let (row, col) = cheapest_first(&adjusted, &remaining).ok_or(
            TransportError::DegenerateState {
                method: Method::Russell,
                step: allocation.steps(),
            },
        )?;

        let quantity = remaining.settle(row, col);
        allocation.assign(row, col, quantity, costs.get(row, col));
        debug!(
            "russell: ship {quantity} via ({row}, {col}) at adjusted cost {}",
            adjusted.get(row, col)
        );
    }

    Ok(allocation)
}

/// Fresh adjusted-cost view `c(i, j) - u_i - v_j` over the remaining cells.
///
/// Row and column maxima start at zero and only consider eligible cells.
fn adjusted_costs(costs: &CostMatrix, remaining: &Remaining) -> CostMatrix {
    let rows = costs.num_rows();
    let cols = costs.num_cols();
    let mut row_max = vec![0.0_f64; rows];
    let mut col_max = vec![0.0_f64; cols];

    for r in (0..rows).filter(|&r| remaining.has_supply(r)) {
        for c in (0..cols).filter(|&c| remaining.has_demand(c)) {
            let cost = costs.get(r, c);
            row_max[r] = row_max[r].max(cost);
            col_max[c] = col_max[c].max(cost);
        }
    }

    let mut adjusted = CostMatrix::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            adjusted.set(r, c, costs.get(r, c) - (row_max[r] + col_max[c]));
        }
    }
    adjusted
}

/// Eligible cell with the smallest adjusted cost; the first in row-major
/// order wins ties.
fn cheapest_first(adjusted: &CostMatrix, remaining: &Remaining) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for r in (0..adjusted.num_rows()).filter(|&r| remaining.has_supply(r)) {
        for c in (0..adjusted.num_cols()).filter(|&c| remaining.has_demand(c)) {
            let value = adjusted.get(r, c);
            if best.map_or(true, |(_, _, b)| value < b) {
                best = Some((r, c, value));
            }
        }
    }
    best.map(|(r, c, _)| (r, c))
}
