//! Solver configuration.

use crate::models::Method;

/// Configuration shared by the validator and the heuristics.
///
/// # Examples
///
/// ```
/// use u_transport::SolverConfig;
/// use u_transport::models::Method;
///
/// let config = SolverConfig::default()
///     .with_tolerance(1e-6)
///     .with_methods(&[Method::Vogel, Method::Russell]);
/// assert_eq!(config.tolerance(), 1e-6);
/// assert_eq!(config.methods(), &[Method::Vogel, Method::Russell]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    tolerance: f64,
    methods: Vec<Method>,
}

impl SolverConfig {
    /// Default numeric tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Sets the tolerance used for balance checks, exhaustion checks and
    /// supply/demand ties.
    ///
    /// The value is relative: heuristics scale it by the larger of total
    /// supply and total demand.
    ///
    /// Negative or non-finite values are replaced by zero (exact comparison).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            0.0
        };
        self
    }

    /// Sets the heuristics run by [`compare`](crate::solver::compare), in order.
    pub fn with_methods(mut self, methods: &[Method]) -> Self {
        self.methods = methods.to_vec();
        self
    }

    /// Numeric tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Heuristics to compare.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            methods: Method::ALL.to_vec(),
        }
    }
}
