//! Dense cost matrix.

use serde::{Deserialize, Serialize};

/// A dense `rows x cols` unit-cost matrix stored in row-major order.
///
/// Row `i` belongs to source `i + 1`, column `j` to destination `j + 1`.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
///
/// let cm = CostMatrix::from_rows(&[vec![2.0, 3.0], vec![4.0, 1.0]]).unwrap();
/// assert_eq!(cm.get(1, 0), 4.0);
/// assert_eq!(cm.num_rows(), 2);
/// assert_eq!(cm.num_cols(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostMatrixData")]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct CostMatrixData {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<CostMatrixData> for CostMatrix {
    type Error = String;

    fn try_from(raw: CostMatrixData) -> Result<Self, Self::Error> {
        let len = raw.data.len();
        Self::from_data(raw.rows, raw.cols, raw.data)
            .ok_or_else(|| format!("{len} costs do not fill a {}x{} matrix", raw.rows, raw.cols))
    }
}

impl CostMatrix {
    /// Creates a cost matrix of the given shape, initialized to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// Returns `None` if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            data: rows.iter().flatten().copied().collect(),
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a cost matrix from an explicit row-major buffer.
    ///
    /// Returns `None` if the data length doesn't match `rows * cols`.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return None;
        }
        Some(Self { data, rows, cols })
    }

    /// Returns the unit cost of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col]
    }

    /// Sets the unit cost of cell `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cost: f64) {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col] = cost;
    }

    /// Number of rows (sources).
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (destinations).
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the costs of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(col).step_by(self.cols.max(1)).copied()
    }

    /// All costs in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }
}
