//! Problem validator: applicability, balance and allocation checks.

use crate::error::{StructuralIssue, TransportError};
use crate::models::{Allocation, TransportationProblem};

use super::{Violation, ViolationType};

/// Checks whether the heuristics may run on a problem and whether an
/// allocation conserves supply and demand.
///
/// All comparisons are relative to the magnitude of the compared values,
/// with a floor of one, scaled by `tolerance`.
///
/// # Examples
///
/// ```
/// use u_transport::validation::ProblemValidator;
///
/// let validator = ProblemValidator::new(1e-9);
/// let costs = vec![vec![2.0, 3.0], vec![4.0, 1.0]];
///
/// assert!(validator.is_applicable(&costs, &[20.0, 30.0], &[10.0, 40.0]));
/// assert!(validator.is_valid(&[20.0, 30.0], &[10.0, 40.0]));
/// assert!(!validator.is_valid(&[10.0], &[9.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProblemValidator {
    tolerance: f64,
}

impl ProblemValidator {
    /// Creates a validator with the given numeric tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(0.0),
        }
    }

    /// Numeric tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns `true` if `a` and `b` are equal within tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance * a.abs().max(b.abs()).max(1.0)
    }

    /// Checks shape and sign of the raw inputs, reporting the first defect.
    ///
    /// Rules, in order: neither side is empty; one cost row per supply; one
    /// cost column per demand in every row; no non-finite or negative cost,
    /// supply or demand.
    pub fn check_applicable<R: AsRef<[f64]>>(
        &self,
        costs: &[R],
        supply: &[f64],
        demand: &[f64],
    ) -> Result<(), StructuralIssue> {
        if supply.is_empty() || demand.is_empty() {
            return Err(StructuralIssue::Empty {
                sources: supply.len(),
                destinations: demand.len(),
            });
        }
        if costs.len() != supply.len() {
            return Err(StructuralIssue::RowCountMismatch {
                rows: costs.len(),
                sources: supply.len(),
            });
        }
        for (i, row) in costs.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != demand.len() {
                return Err(StructuralIssue::ColumnCountMismatch {
                    source_id: i + 1,
                    columns: row.len(),
                    destinations: demand.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                check_finite("cost", value)?;
                if value < 0.0 {
                    return Err(StructuralIssue::NegativeCost {
                        source_id: i + 1,
                        destination: j + 1,
                        value,
                    });
                }
            }
        }
        for (i, &value) in supply.iter().enumerate() {
            check_finite("supply", value)?;
            if value < 0.0 {
                return Err(StructuralIssue::NegativeSupply {
                    source_id: i + 1,
                    value,
                });
            }
        }
        for (j, &value) in demand.iter().enumerate() {
            check_finite("demand", value)?;
            if value < 0.0 {
                return Err(StructuralIssue::NegativeDemand {
                    destination: j + 1,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Returns `true` if the heuristics may run on these inputs.
    pub fn is_applicable<R: AsRef<[f64]>>(
        &self,
        costs: &[R],
        supply: &[f64],
        demand: &[f64],
    ) -> bool {
        self.check_applicable(costs, supply, demand).is_ok()
    }

    /// Checks that total supply equals total demand.
    pub fn check_balanced(&self, supply: &[f64], demand: &[f64]) -> Result<(), TransportError> {
        let total_supply: f64 = supply.iter().sum();
        let total_demand: f64 = demand.iter().sum();
        if self.approx_eq(total_supply, total_demand) {
            Ok(())
        } else {
            Err(TransportError::Imbalance {
                supply: total_supply,
                demand: total_demand,
            })
        }
    }

    /// Returns `true` if total supply equals total demand.
    pub fn is_valid(&self, supply: &[f64], demand: &[f64]) -> bool {
        self.check_balanced(supply, demand).is_ok()
    }

    /// Runs every pre-solve check on a problem.
    pub fn validate(&self, problem: &TransportationProblem) -> Result<(), TransportError> {
        let costs = problem.costs();
        let rows: Vec<&[f64]> = (0..costs.num_rows()).map(|r| costs.row(r)).collect();
        self.check_applicable(&rows, problem.supply(), problem.demand())?;
        self.check_balanced(problem.supply(), problem.demand())
    }

    /// Evaluates an allocation against its problem.
    ///
    /// A feasible allocation has an empty violations list.
    pub fn evaluate(
        &self,
        problem: &TransportationProblem,
        allocation: &Allocation,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        let rows = problem.num_sources();
        let cols = problem.num_destinations();

        if allocation.num_rows() != rows || allocation.num_cols() != cols {
            violations.push(Violation::new(ViolationType::ShapeMismatch {
                rows: allocation.num_rows(),
                cols: allocation.num_cols(),
            }));
            return violations;
        }

        let mut expected_cost = 0.0;
        for r in 0..rows {
            for c in 0..cols {
                let quantity = allocation.get(r, c);
                if quantity < 0.0 {
                    violations.push(Violation::new(ViolationType::NegativeQuantity {
                        source_id: r + 1,
                        destination: c + 1,
                        quantity,
                    }));
                }
                expected_cost += quantity * problem.costs().get(r, c);
            }
        }

        for (r, &supply) in problem.supply().iter().enumerate() {
            let shipped = allocation.row_sum(r);
            if !self.approx_eq(shipped, supply) {
                violations.push(Violation::new(ViolationType::SupplyNotConserved {
                    source_id: r + 1,
                    shipped,
                    supply,
                }));
            }
        }

        for (c, &demand) in problem.demand().iter().enumerate() {
            let received = allocation.column_sum(c);
            if !self.approx_eq(received, demand) {
                violations.push(Violation::new(ViolationType::DemandNotConserved {
                    destination: c + 1,
                    received,
                    demand,
                }));
            }
        }

        if !self.approx_eq(allocation.total_cost(), expected_cost) {
            violations.push(Violation::new(ViolationType::CostMismatch {
                reported: allocation.total_cost(),
                expected: expected_cost,
            }));
        }

        violations
    }
}

impl Default for ProblemValidator {
    fn default() -> Self {
        Self::new(crate::config::SolverConfig::DEFAULT_TOLERANCE)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), StructuralIssue> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StructuralIssue::NonFinite { field, value })
    }
}
