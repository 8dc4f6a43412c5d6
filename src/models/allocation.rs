//! Allocation matrix produced by a heuristic.

use serde::{Deserialize, Serialize};

use super::Method;

/// Shipped quantities per (source, destination) cell plus their total cost.
///
/// Starts as an all-zero grid; each heuristic writes every cell at most once.
///
/// # Examples
///
/// ```
/// use u_transport::models::{Allocation, Method};
///
/// let mut alloc = Allocation::new(Method::NorthWest, 2, 2);
/// alloc.assign(0, 0, 10.0, 2.0);
/// alloc.assign(0, 1, 10.0, 3.0);
/// assert_eq!(alloc.total_cost(), 50.0);
/// assert_eq!(alloc.row_sum(0), 20.0);
/// assert_eq!(alloc.quantity(1, 2), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AllocationData")]
pub struct Allocation {
    method: Method,
    rows: usize,
    cols: usize,
    quantities: Vec<f64>,
    total_cost: f64,
    steps: usize,
}

#[derive(Deserialize)]
struct AllocationData {
    method: Method,
    rows: usize,
    cols: usize,
    quantities: Vec<f64>,
    total_cost: f64,
    steps: usize,
}

impl TryFrom<AllocationData> for Allocation {
    type Error = String;

    fn try_from(raw: AllocationData) -> Result<Self, Self::Error> {
        let len = raw.quantities.len();
        if raw.rows.checked_mul(raw.cols) != Some(len) {
            return Err(format!(
                "{len} quantities do not fill a {}x{} allocation",
                raw.rows, raw.cols
            ));
        }
        if let Some(q) = raw.quantities.iter().find(|q| !q.is_finite() || **q < 0.0) {
            return Err(format!("invalid quantity {q}"));
        }
        if !raw.total_cost.is_finite() {
            return Err(format!("invalid total cost {}", raw.total_cost));
        }
        Ok(Self {
            method: raw.method,
            rows: raw.rows,
            cols: raw.cols,
            quantities: raw.quantities,
            total_cost: raw.total_cost,
            steps: raw.steps,
        })
    }
}

impl Allocation {
    /// Creates an empty `rows x cols` allocation.
    pub fn new(method: Method, rows: usize, cols: usize) -> Self {
        Self {
            method,
            rows,
            cols,
            quantities: vec![0.0; rows * cols],
            total_cost: 0.0,
            steps: 0,
        }
    }

    /// Ships `quantity` units through cell `(row, col)` at `unit_cost` each.
    ///
    /// Counts as one allocation step and adds `quantity * unit_cost` to the
    /// total cost.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn assign(&mut self, row: usize, col: usize, quantity: f64, unit_cost: f64) {
        assert!(col < self.cols, "column {col} out of bounds");
        let cell = &mut self.quantities[row * self.cols + col];
        debug_assert_eq!(*cell, 0.0, "cell ({row}, {col}) allocated twice");
        *cell = quantity;
        self.total_cost += quantity * unit_cost;
        self.steps += 1;
    }

    /// Heuristic that produced this allocation.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Number of rows (sources).
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (destinations).
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Quantity in cell `(row, col)`, 0-based.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.quantities[row * self.cols + col]
    }

    /// Quantity shipped from `source` to `destination` (both 1-based).
    pub fn quantity(&self, source: usize, destination: usize) -> Option<f64> {
        let row = source.checked_sub(1).filter(|&i| i < self.rows)?;
        let col = destination.checked_sub(1).filter(|&j| j < self.cols)?;
        Some(self.get(row, col))
    }

    /// Total transportation cost.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of allocation steps performed.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sum of row `row`.
    pub fn row_sum(&self, row: usize) -> f64 {
        self.quantities[row * self.cols..(row + 1) * self.cols]
            .iter()
            .sum()
    }

    /// Sum of column `col`.
    pub fn column_sum(&self, col: usize) -> f64 {
        (0..self.rows).map(|r| self.get(r, col)).sum()
    }

    /// Cells with a positive quantity, row-major.
    pub fn basic_cells(&self) -> Vec<(usize, usize)> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&(r, c)| self.get(r, c) > 0.0)
            .collect()
    }

    /// Returns `true` if fewer than `rows + cols - 1` cells are positive.
    pub fn is_degenerate(&self) -> bool {
        let needed = (self.rows + self.cols).saturating_sub(1);
        self.basic_cells().len() < needed
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|r| self.quantities[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }
}
