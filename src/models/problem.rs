//! Transportation problem instance.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;
use crate::error::{StructuralIssue, TransportError};
use crate::validation::ProblemValidator;

/// A transportation problem: supplies, demands and unit costs.
///
/// Construction runs the structural checks of
/// [`ProblemValidator::check_applicable`], so every instance has a cost
/// matrix shaped `num_sources x num_destinations` with finite, non-negative
/// entries. Balance is *not* enforced here; it is checked when solving.
///
/// Sources and destinations are identified by 1-based integers at this
/// boundary. Slices returned by [`supply`](Self::supply) and
/// [`demand`](Self::demand) are 0-based.
///
/// # Examples
///
/// ```
/// use u_transport::models::TransportationProblem;
///
/// let problem = TransportationProblem::new(
///     vec![20.0, 30.0],
///     vec![10.0, 40.0],
///     vec![vec![2.0, 3.0], vec![4.0, 1.0]],
/// ).unwrap();
///
/// assert_eq!(problem.num_sources(), 2);
/// assert_eq!(problem.supply_of(2), Some(30.0));
/// assert_eq!(problem.unit_cost(2, 1), Some(4.0));
/// assert!(problem.is_balanced(1e-9));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProblemData", into = "ProblemData")]
pub struct TransportationProblem {
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: CostMatrix,
}

#[derive(Serialize, Deserialize)]
struct ProblemData {
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: Vec<Vec<f64>>,
}

impl TryFrom<ProblemData> for TransportationProblem {
    type Error = TransportError;

    fn try_from(data: ProblemData) -> Result<Self, Self::Error> {
        Self::new(data.supply, data.demand, data.costs)
    }
}

impl From<TransportationProblem> for ProblemData {
    fn from(problem: TransportationProblem) -> Self {
        Self {
            costs: problem.costs.to_rows(),
            supply: problem.supply,
            demand: problem.demand,
        }
    }
}

impl TransportationProblem {
    /// Creates a problem from supplies, demands and nested cost rows.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Structural`] if the shapes disagree or any
    /// value is negative or non-finite.
    pub fn new(
        supply: Vec<f64>,
        demand: Vec<f64>,
        costs: Vec<Vec<f64>>,
    ) -> Result<Self, TransportError> {
        ProblemValidator::default().check_applicable(&costs, &supply, &demand)?;
        let rows = costs.len();
        let costs = CostMatrix::from_data(rows, demand.len(), costs.concat()).ok_or(
            StructuralIssue::RowCountMismatch {
                rows,
                sources: supply.len(),
            },
        )?;
        Ok(Self {
            supply,
            demand,
            costs,
        })
    }

    /// Creates a problem from an existing cost matrix.
    pub fn with_cost_matrix(
        supply: Vec<f64>,
        demand: Vec<f64>,
        costs: CostMatrix,
    ) -> Result<Self, TransportError> {
        let rows: Vec<&[f64]> = (0..costs.num_rows()).map(|r| costs.row(r)).collect();
        ProblemValidator::default().check_applicable(&rows, &supply, &demand)?;
        Ok(Self {
            supply,
            demand,
            costs,
        })
    }

    /// Creates a problem from identifier-keyed maps.
    ///
    /// Keys of `supply` must be exactly `1..=N`, keys of `demand` exactly
    /// `1..=M`, and `costs` must hold every `(source, destination)` pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use u_transport::models::TransportationProblem;
    ///
    /// let supply = BTreeMap::from([(1, 10.0)]);
    /// let demand = BTreeMap::from([(1, 4.0), (2, 6.0)]);
    /// let costs = BTreeMap::from([((1, 1), 3.0), ((1, 2), 5.0)]);
    ///
    /// let problem = TransportationProblem::from_maps(&supply, &demand, &costs).unwrap();
    /// assert_eq!(problem.unit_cost(1, 2), Some(5.0));
    /// ```
    pub fn from_maps(
        supply: &BTreeMap<usize, f64>,
        demand: &BTreeMap<usize, f64>,
        costs: &BTreeMap<(usize, usize), f64>,
    ) -> Result<Self, TransportError> {
        let supply = dense_from_ids("source", supply)?;
        let demand = dense_from_ids("destination", demand)?;

        for &(s, d) in costs.keys() {
            check_id("source", s, supply.len())?;
            check_id("destination", d, demand.len())?;
        }

        let mut rows = Vec::with_capacity(supply.len());
        for s in 1..=supply.len() {
            let mut row = Vec::with_capacity(demand.len());
            for d in 1..=demand.len() {
                let cost = costs.get(&(s, d)).ok_or(TransportError::MissingCost {
                    source_id: s,
                    destination: d,
                })?;
                row.push(*cost);
            }
            rows.push(row);
        }

        Self::new(supply, demand, rows)
    }

    /// Builds a problem whose invariants the caller already guarantees.
    pub(crate) fn from_parts(supply: Vec<f64>, demand: Vec<f64>, costs: CostMatrix) -> Self {
        debug_assert_eq!(costs.num_rows(), supply.len());
        debug_assert_eq!(costs.num_cols(), demand.len());
        Self {
            supply,
            demand,
            costs,
        }
    }

    /// Number of sources.
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations.
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Source identifiers, `1..=N`.
    pub fn sources(&self) -> RangeInclusive<usize> {
        1..=self.supply.len()
    }

    /// Destination identifiers, `1..=M`.
    pub fn destinations(&self) -> RangeInclusive<usize> {
        1..=self.demand.len()
    }

    /// Supplies, indexed by row.
    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    /// Demands, indexed by column.
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Unit-cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Supply of source `source` (1-based).
    pub fn supply_of(&self, source: usize) -> Option<f64> {
        source
            .checked_sub(1)
            .and_then(|i| self.supply.get(i))
            .copied()
    }

    /// Demand of destination `destination` (1-based).
    pub fn demand_of(&self, destination: usize) -> Option<f64> {
        destination
            .checked_sub(1)
            .and_then(|j| self.demand.get(j))
            .copied()
    }

    /// Unit cost from `source` to `destination` (both 1-based).
    pub fn unit_cost(&self, source: usize, destination: usize) -> Option<f64> {
        let row = source.checked_sub(1).filter(|&i| i < self.num_sources())?;
        let col = destination
            .checked_sub(1)
            .filter(|&j| j < self.num_destinations())?;
        Some(self.costs.get(row, col))
    }

    /// Sum of all supplies.
    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// Returns `true` if total supply equals total demand within `tolerance`.
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        ProblemValidator::new(tolerance).is_valid(&self.supply, &self.demand)
    }
}

fn check_id(kind: &'static str, id: usize, count: usize) -> Result<(), TransportError> {
    if id == 0 || id > count {
        return Err(TransportError::UnknownIndex { kind, id, count });
    }
    Ok(())
}

fn dense_from_ids(
    kind: &'static str,
    values: &BTreeMap<usize, f64>,
) -> Result<Vec<f64>, TransportError> {
    let count = values.len();
    for &id in values.keys() {
        check_id(kind, id, count)?;
    }
    // Keys are unique and within 1..=count, so iteration order is 1, 2, ...
    Ok(values.values().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransportationProblem {
        TransportationProblem::new(
            vec![7.0, 9.0, 18.0],
            vec![5.0, 8.0, 7.0, 14.0],
            vec![
                vec![19.0, 30.0, 50.0, 10.0],
                vec![70.0, 30.0, 40.0, 60.0],
                vec![40.0, 8.0, 70.0, 20.0],
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_dimensions() {
        let p = sample();
        assert_eq!(p.num_sources(), 3);
        assert_eq!(p.num_destinations(), 4);
        assert_eq!(p.sources(), 1..=3);
        assert_eq!(p.destinations(), 1..=4);
        assert_eq!(p.costs().num_rows(), 3);
    }

    #[test]
    fn test_identifier_accessors() {
        let p = sample();
        assert_eq!(p.supply_of(1), Some(7.0));
        assert_eq!(p.supply_of(0), None);
        assert_eq!(p.supply_of(4), None);
        assert_eq!(p.demand_of(4), Some(14.0));
        assert_eq!(p.unit_cost(3, 2), Some(8.0));
        assert_eq!(p.unit_cost(3, 5), None);
        assert_eq!(p.unit_cost(0, 1), None);
    }

    #[test]
    fn test_totals() {
        let p = sample();
        assert_eq!(p.total_supply(), 34.0);
        assert_eq!(p.total_demand(), 34.0);
        assert!(p.is_balanced(1e-9));
    }

    #[test]
    fn test_unbalanced_is_constructible() {
        let p = TransportationProblem::new(vec![10.0], vec![9.0], vec![vec![1.0]]).expect("shape ok");
        assert!(!p.is_balanced(1e-9));
    }

    #[test]
    fn test_new_rejects_negative_cost() {
        let err = TransportationProblem::new(vec![1.0], vec![1.0], vec![vec![-1.0]]).unwrap_err();
        assert_eq!(
            err,
            TransportError::Structural(StructuralIssue::NegativeCost {
                source_id: 1,
                destination: 1,
                value: -1.0,
            })
        );
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = TransportationProblem::new(
            vec![5.0, 5.0],
            vec![4.0, 6.0],
            vec![vec![1.0, 2.0], vec![3.0]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransportError::Structural(StructuralIssue::ColumnCountMismatch {
                source_id: 2,
                columns: 1,
                destinations: 2,
            })
        );
    }

    #[test]
    fn test_with_cost_matrix_shape_mismatch() {
        let costs = CostMatrix::new(2, 2);
        let err = TransportationProblem::with_cost_matrix(vec![1.0], vec![1.0, 0.0], costs)
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::Structural(StructuralIssue::RowCountMismatch { rows: 2, sources: 1 })
        ));
    }

    #[test]
    fn test_from_maps() {
        let supply = BTreeMap::from([(1, 20.0), (2, 30.0)]);
        let demand = BTreeMap::from([(1, 10.0), (2, 40.0)]);
        let costs = BTreeMap::from([((1, 1), 2.0), ((1, 2), 3.0), ((2, 1), 4.0), ((2, 2), 1.0)]);
        let p = TransportationProblem::from_maps(&supply, &demand, &costs).expect("valid");
        assert_eq!(p.supply(), &[20.0, 30.0]);
        assert_eq!(p.costs().to_rows(), vec![vec![2.0, 3.0], vec![4.0, 1.0]]);
    }

    #[test]
    fn test_from_maps_missing_cost() {
        let supply = BTreeMap::from([(1, 5.0)]);
        let demand = BTreeMap::from([(1, 2.0), (2, 3.0)]);
        let costs = BTreeMap::from([((1, 1), 2.0)]);
        let err = TransportationProblem::from_maps(&supply, &demand, &costs).unwrap_err();
        assert_eq!(
            err,
            TransportError::MissingCost {
                source_id: 1,
                destination: 2
            }
        );
    }

    #[test]
    fn test_from_maps_unknown_index() {
        let supply = BTreeMap::from([(1, 5.0), (3, 5.0)]);
        let demand = BTreeMap::from([(1, 10.0)]);
        let costs = BTreeMap::new();
        let err = TransportationProblem::from_maps(&supply, &demand, &costs).unwrap_err();
        assert_eq!(
            err,
            TransportError::UnknownIndex {
                kind: "source",
                id: 3,
                count: 2
            }
        );
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let json = r#"{"supply":[1.0],"demand":[1.0],"costs":[[1.0,2.0]]}"#;
        assert!(serde_json::from_str::<TransportationProblem>(json).is_err());

        let p = sample();
        let encoded = serde_json::to_string(&p).expect("serialize");
        let decoded: TransportationProblem = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, p);
    }
}
