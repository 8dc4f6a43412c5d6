//! Vogel's Approximation Method (VAM).
//!
//! # Algorithm
//!
//! Every remaining row and column gets a *penalty*: the gap between its two
//! cheapest eligible cells, i.e. the extra unit cost paid if the cheapest
//! cell is not used. The line with the largest penalty is served first,
//! through its cheapest eligible cell, with as much as supply and demand
//! allow. The exhausted row or column drops out and penalties are
//! recomputed.
//!
//! Tie-breaking is fixed so that results are reproducible:
//!
//! - among rows (and among columns) the lowest index with the maximum
//!   penalty wins;
//! - a row beats a column when their penalties are equal;
//! - within the chosen line the *last* cell with the minimum cost wins.
//!
//! # Complexity
//!
//! O((m + n) · m · n) for m sources and n destinations: at most m + n - 1
//! iterations, each recomputing all penalties.
//!
//! # Reference
//!
//! Reinfeld, N.V. & Vogel, W.R. (1958). *Mathematical Programming*.
//! Prentice-Hall, Englewood Cliffs, NJ.

use log::{debug, trace};

use crate::config::SolverConfig;
use crate::error::TransportError;
use crate::models::{Allocation, Method, TransportationProblem};

use super::state::Remaining;

/// The row or column picked for the next allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Line {
    Row(usize),
    Column(usize),
}

/// Builds an initial allocation with Vogel's Approximation Method.
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
/// use u_transport::constructive::vogel_approximation;
/// use u_transport::SolverConfig;
///
/// let problem = TransportationProblem::new(
///     vec![7.0, 9.0, 18.0],
///     vec![5.0, 8.0, 7.0, 14.0],
///     vec![
///         vec![19.0, 30.0, 50.0, 10.0],
///         vec![70.0, 30.0, 40.0, 60.0],
///         vec![40.0, 8.0, 70.0, 20.0],
///     ],
/// ).unwrap();
///
/// let alloc = vogel_approximation(&problem, &SolverConfig::default()).unwrap();
/// assert_eq!(alloc.total_cost(), 779.0);
/// ```
pub fn vogel_approximation(
    problem: &TransportationProblem,
    config: &SolverConfig,
) -> Result<Allocation, TransportError> {
    let rows = problem.num_sources();
    let cols = problem.num_destinations();
    let costs = problem.costs();

    let mut remaining = Remaining::for_problem(problem, config.tolerance());
    let mut allocation = Allocation::new(Method::Vogel, rows, cols);

    while !remaining.is_done() {
        let degenerate = TransportError::DegenerateState {
            method: Method::Vogel,
            step: allocation.steps(),
        };

        let row_penalties: Vec<Option<f64>> = (0..rows)
            .map(|r| {
                if !remaining.has_supply(r) {
                    return None;
                }
                penalty(
                    (0..cols)
                        .filter(|&c| remaining.has_demand(c))
                        .map(|c| costs.get(r, c)),
                )
            })
            .collect();
        let col_penalties: Vec<Option<f64>> = (0..cols)
            .map(|c| {
                if !remaining.has_demand(c) {
                    return None;
                }
                penalty(
                    (0..rows)
                        .filter(|&r| remaining.has_supply(r))
                        .map(|r| costs.get(r, c)),
                )
            })
            .collect();
        trace!("vogel: row penalties {row_penalties:?}, column penalties {col_penalties:?}");

        let (row, col) = match select_line(&row_penalties, &col_penalties) {
            Some(Line::Row(r)) => {
                let c = cheapest_last(
                    (0..cols)
                        .filter(|&c| remaining.has_demand(c))
                        .map(|c| (c, costs.get(r, c))),
                )
                .ok_or(degenerate)?;
                (r, c)
            }
            Some(Line::Column(c)) => {
                let r = cheapest_last(
                    (0..rows)
                        .filter(|&r| remaining.has_supply(r))
                        .map(|r| (r, costs.get(r, c))),
                )
                .ok_or(degenerate)?;
                (r, c)
            }
            None => return Err(degenerate),
        };

        let quantity = remaining.settle(row, col);
        allocation.assign(row, col, quantity, costs.get(row, col));
        debug!(
            "vogel: ship {quantity} via ({row}, {col}); supply left {}, demand left {}",
            remaining.supply(row),
            remaining.demand(col)
        );
    }

    Ok(allocation)
}

/// Gap between the two smallest costs; zero for a single cost, `None` when
/// there are none.
fn penalty(costs: impl Iterator<Item = f64>) -> Option<f64> {
    let mut lowest: Option<f64> = None;
    let mut second: Option<f64> = None;
    for cost in costs {
        match lowest {
            Some(l) if cost >= l => {
                if second.map_or(true, |s| cost < s) {
                    second = Some(cost);
                }
            }
            _ => {
                second = lowest;
                lowest = Some(cost);
            }
        }
    }
    match (lowest, second) {
        (Some(l), Some(s)) => Some(s - l),
        (Some(_), None) => Some(0.0),
        _ => None,
    }
}

/// First index holding the largest penalty.
fn max_penalty(penalties: &[Option<f64>]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in penalties.iter().enumerate() {
        if let Some(p) = *p {
            if best.map_or(true, |(_, b)| p > b) {
                best = Some((i, p));
            }
        }
    }
    best
}

/// Picks the line with the greatest penalty; rows win ties.
fn select_line(row_penalties: &[Option<f64>], col_penalties: &[Option<f64>]) -> Option<Line> {
    match (max_penalty(row_penalties), max_penalty(col_penalties)) {
        (Some((r, rp)), Some((_, cp))) if rp >= cp => Some(Line::Row(r)),
        (Some((r, _)), None) => Some(Line::Row(r)),
        (_, Some((c, _))) => Some(Line::Column(c)),
        (None, None) => None,
    }
}

/// Index of the minimum cost; the last one scanned wins ties.
fn cheapest_last(candidates: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, cost) in candidates {
        if best.map_or(true, |(_, b)| cost <= b) {
            best = Some((i, cost));
        }
    }
    best.map(|(i, _)| i)
}
