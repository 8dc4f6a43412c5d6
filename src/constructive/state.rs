//! Remaining supply/demand shared by the line-exhausting heuristics.

use crate::models::TransportationProblem;

/// Absolute threshold for exhaustion and ties, scaled to the problem.
///
/// `tolerance` is relative to the larger of total supply and total demand,
/// matching how balance is checked, so tiny or huge quantities behave alike.
pub(crate) fn working_tolerance(problem: &TransportationProblem, tolerance: f64) -> f64 {
    tolerance * problem.total_supply().max(problem.total_demand())
}

/// Working copy of supplies and demands, shrinking as cells are allocated.
///
/// A value at or below the tolerance counts as exhausted.
#[derive(Debug, Clone)]
pub(crate) struct Remaining {
    supply: Vec<f64>,
    demand: Vec<f64>,
    tolerance: f64,
}

impl Remaining {
    pub(crate) fn new(supply: &[f64], demand: &[f64], tolerance: f64) -> Self {
        Self {
            supply: supply.to_vec(),
            demand: demand.to_vec(),
            tolerance,
        }
    }

    pub(crate) fn for_problem(problem: &TransportationProblem, tolerance: f64) -> Self {
        Self::new(
            problem.supply(),
            problem.demand(),
            working_tolerance(problem, tolerance),
        )
    }

    pub(crate) fn supply(&self, row: usize) -> f64 {
        self.supply[row]
    }

    pub(crate) fn demand(&self, col: usize) -> f64 {
        self.demand[col]
    }

    pub(crate) fn has_supply(&self, row: usize) -> bool {
        self.supply[row] > self.tolerance
    }

    pub(crate) fn has_demand(&self, col: usize) -> bool {
        self.demand[col] > self.tolerance
    }

    /// Returns `true` once every supply or every demand is exhausted.
    pub(crate) fn is_done(&self) -> bool {
        let supply_done = (0..self.supply.len()).all(|r| !self.has_supply(r));
        let demand_done = (0..self.demand.len()).all(|c| !self.has_demand(c));
        supply_done || demand_done
    }

    /// Ships `min(supply, demand)` through `(row, col)` and returns it.
    ///
    /// The smaller side drops to zero and the larger is reduced; when both
    /// agree within tolerance both drop to zero.
    pub(crate) fn settle(&mut self, row: usize, col: usize) -> f64 {
        let s = self.supply[row];
        let d = self.demand[col];
        if d < s - self.tolerance {
            self.supply[row] = s - d;
            self.demand[col] = 0.0;
            d
        } else if s < d - self.tolerance {
            self.supply[row] = 0.0;
            self.demand[col] = d - s;
            s
        } else {
            self.supply[row] = 0.0;
            self.demand[col] = 0.0;
            s.min(d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_demand_smaller() {
        let mut rem = Remaining::new(&[10.0], &[4.0], 1e-9);
        assert_eq!(rem.settle(0, 0), 4.0);
        assert_eq!(rem.supply(0), 6.0);
        assert_eq!(rem.demand(0), 0.0);
        assert!(rem.is_done());
    }

    #[test]
    fn test_settle_supply_smaller() {
        let mut rem = Remaining::new(&[3.0, 5.0], &[8.0], 1e-9);
        assert_eq!(rem.settle(0, 0), 3.0);
        assert_eq!(rem.supply(0), 0.0);
        assert_eq!(rem.demand(0), 5.0);
        assert!(!rem.is_done());
        assert!(!rem.has_supply(0));
        assert!(rem.has_supply(1));
    }

    #[test]
    fn test_settle_tie_zeroes_both() {
        let mut rem = Remaining::new(&[5.0, 1.0], &[5.0, 1.0], 1e-9);
        assert_eq!(rem.settle(0, 0), 5.0);
        assert!(!rem.has_supply(0));
        assert!(!rem.has_demand(0));
    }

    #[test]
    fn test_settle_near_tie_within_tolerance() {
        let mut rem = Remaining::new(&[0.30000000000000004], &[0.3], 1e-9);
        rem.settle(0, 0);
        assert_eq!(rem.supply(0), 0.0);
        assert_eq!(rem.demand(0), 0.0);
    }

    #[test]
    fn test_tiny_quantities_stay_live() {
        let problem = TransportationProblem::new(
            vec![3e-10, 2e-10],
            vec![5e-10],
            vec![vec![1.0], vec![2.0]],
        )
        .expect("valid");
        let mut rem = Remaining::for_problem(&problem, 1e-9);
        assert!(rem.has_supply(0));
        assert!(rem.has_supply(1));
        assert_eq!(rem.settle(0, 0), 3e-10);
        assert!(rem.has_demand(0));
        assert!(!rem.is_done());
    }

    #[test]
    fn test_working_tolerance_scales_with_totals() {
        let problem =
            TransportationProblem::new(vec![1e6], vec![1e6], vec![vec![1.0]]).expect("valid");
        assert!((working_tolerance(&problem, 1e-9) - 1e-3).abs() < 1e-15);
        assert_eq!(working_tolerance(&problem, 0.0), 0.0);
    }

    #[test]
    fn test_done_when_all_exhausted() {
        let rem = Remaining::new(&[0.0, 0.0], &[0.0], 1e-9);
        assert!(rem.is_done());
    }
}
