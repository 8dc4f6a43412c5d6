//! Allocation violation types.

/// A way in which an allocation fails to solve its problem.
///
/// Sources and destinations are 1-based identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// The allocation grid does not match the problem's dimensions.
    ShapeMismatch {
        /// Allocation rows.
        rows: usize,
        /// Allocation columns.
        cols: usize,
    },
    /// A cell holds a negative quantity.
    NegativeQuantity {
        /// Source identifier.
        source_id: usize,
        /// Destination identifier.
        destination: usize,
        /// Offending quantity.
        quantity: f64,
    },
    /// A source ships a different amount than its supply.
    SupplyNotConserved {
        /// Source identifier.
        source_id: usize,
        /// Row sum of the allocation.
        shipped: f64,
        /// Original supply.
        supply: f64,
    },
    /// A destination receives a different amount than its demand.
    DemandNotConserved {
        /// Destination identifier.
        destination: usize,
        /// Column sum of the allocation.
        received: f64,
        /// Original demand.
        demand: f64,
    },
    /// The reported total cost differs from the cost recomputed from cells.
    CostMismatch {
        /// Cost stored in the allocation.
        reported: f64,
        /// Sum of quantity times unit cost.
        expected: f64,
    },
}

/// A constraint violation found when evaluating an allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}
