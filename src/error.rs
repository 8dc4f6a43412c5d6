//! Error types.

use thiserror::Error;

use crate::models::Method;

/// A structural defect that makes a problem unsuitable for any heuristic.
///
/// Positions are reported with 1-based source/destination identifiers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralIssue {
    /// The problem has no sources or no destinations.
    #[error("problem has {sources} sources and {destinations} destinations")]
    Empty {
        /// Number of sources.
        sources: usize,
        /// Number of destinations.
        destinations: usize,
    },
    /// The cost matrix row count differs from the number of sources.
    #[error("cost matrix has {rows} rows but there are {sources} sources")]
    RowCountMismatch {
        /// Rows in the cost matrix.
        rows: usize,
        /// Supply entries.
        sources: usize,
    },
    /// A cost matrix row length differs from the number of destinations.
    #[error("cost row {source_id} has {columns} columns but there are {destinations} destinations")]
    ColumnCountMismatch {
        /// Source whose row is malformed.
        source_id: usize,
        /// Columns in that row.
        columns: usize,
        /// Demand entries.
        destinations: usize,
    },
    /// A unit cost is negative.
    #[error("cost from source {source_id} to destination {destination} is negative ({value})")]
    NegativeCost {
        /// Source identifier.
        source_id: usize,
        /// Destination identifier.
        destination: usize,
        /// Offending value.
        value: f64,
    },
    /// A supply is negative.
    #[error("supply of source {source_id} is negative ({value})")]
    NegativeSupply {
        /// Source identifier.
        source_id: usize,
        /// Offending value.
        value: f64,
    },
    /// A demand is negative.
    #[error("demand of destination {destination} is negative ({value})")]
    NegativeDemand {
        /// Destination identifier.
        destination: usize,
        /// Offending value.
        value: f64,
    },
    /// A cost, supply or demand is NaN or infinite.
    #[error("non-finite value {value} in {field}")]
    NonFinite {
        /// Which input holds the value ("cost", "supply" or "demand").
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Errors raised while building or solving a transportation problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The problem is malformed; no heuristic may run.
    #[error("problem is not applicable: {0}")]
    Structural(#[from] StructuralIssue),
    /// Total supply differs from total demand.
    #[error("problem is not balanced: total supply {supply} != total demand {demand}")]
    Imbalance {
        /// Total supply.
        supply: f64,
        /// Total demand.
        demand: f64,
    },
    /// A heuristic found no eligible cell while supply and demand remained.
    #[error("{method} found no eligible cell at step {step}")]
    DegenerateState {
        /// Heuristic that stalled.
        method: Method,
        /// Number of allocations made before stalling.
        step: usize,
    },
    /// A mapping input lacks the cost of a source/destination pair.
    #[error("missing cost from source {source_id} to destination {destination}")]
    MissingCost {
        /// Source identifier.
        source_id: usize,
        /// Destination identifier.
        destination: usize,
    },
    /// A mapping input uses an identifier outside `1..=count`.
    #[error("{kind} identifier {id} is outside 1..={count}")]
    UnknownIndex {
        /// "source" or "destination".
        kind: &'static str,
        /// Offending identifier.
        id: usize,
        /// Number of identifiers of that kind.
        count: usize,
    },
}

impl TransportError {
    /// Returns `true` for errors detected before any heuristic runs.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Structural(_) | Self::Imbalance { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_message() {
        let err = TransportError::from(StructuralIssue::RowCountMismatch {
            rows: 2,
            sources: 3,
        });
        assert_eq!(
            err.to_string(),
            "problem is not applicable: cost matrix has 2 rows but there are 3 sources"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_degenerate_is_not_validation() {
        let err = TransportError::DegenerateState {
            method: Method::Vogel,
            step: 3,
        };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("Vogel"));
    }
}
