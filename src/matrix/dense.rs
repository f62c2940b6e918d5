use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{MatrixError, MatrixResult};

/// Right-hand side of an elementwise or product operation: either a scalar
/// broadcast over every cell, or another matrix.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Matrix(&'a Matrix),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        Self::Matrix(matrix)
    }
}

/// Dense row-major `f64` matrix.
///
/// Every operation returns a new matrix; `self` is never touched. The only
/// way to change a value in place is [`Matrix::get_mut`], which is what
/// interactive editors use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from a list of rows. All rows must have the length of
    /// the first one; an empty list gives a 0x0 matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> MatrixResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                let err = MatrixError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                };
                log::warn!("{err}");
                return Err(err);
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// Builds a single column from the given values.
    #[must_use]
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            values: values.to_vec(),
        }
    }

    #[must_use]
    pub fn identity(size: usize) -> Self {
        Self::zeros(size, size).map(|_, row, col| if row == col { 1.0 } else { 0.0 })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.index_of(row, col).map(|index| self.values[index])
    }

    /// Mutable access to one cell, the editing channel for UI collaborators.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        self.index_of(row, col).map(|index| &mut self.values[index])
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.rows).then(|| &self.values[row * self.cols..(row + 1) * self.cols])
    }

    /// Row-major view of all values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Copies the values out as a list of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.values.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Applies `f(value, row, col)` to every cell and returns the result as a
    /// new matrix of the same shape.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64, usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                values.push(f(self.at(row, col), row, col));
            }
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            values,
        }
    }

    /// Structural copy, identical to `clone`.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.map(|value, _, _| value)
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::zeros(self.cols, self.rows).map(|_, row, col| self.at(col, row))
    }

    /// Elementwise sum with a same-shape matrix, or adds a scalar to every cell.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> MatrixResult<Self> {
        self.elementwise("add", rhs.into(), |a, b| a + b)
    }

    /// Elementwise difference with a same-shape matrix, or subtracts a scalar
    /// from every cell.
    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> MatrixResult<Self> {
        self.elementwise("subtract", rhs.into(), |a, b| a - b)
    }

    /// Scales every cell by a scalar, or computes the matrix product
    /// `self * rhs` (`self.cols` must equal `rhs.rows`).
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> MatrixResult<Self> {
        match rhs.into() {
            Operand::Scalar(factor) => Ok(self.map(|value, _, _| value * factor)),
            Operand::Matrix(other) => {
                if self.cols != other.rows {
                    return Err(MatrixError::dimension_mismatch(
                        "multiply",
                        self.shape(),
                        other.shape(),
                    ));
                }
                Ok(Self::zeros(self.rows, other.cols).map(|_, row, col| {
                    let mut sum = 0.0;
                    for k in 0..self.cols {
                        sum += self.at(row, k) * other.at(k, col);
                    }
                    sum
                }))
            }
        }
    }

    /// Adds the `rows x 1` column `offset` to every column of `self`.
    pub fn translate_columns(&self, offset: &Matrix) -> MatrixResult<Self> {
        if offset.cols != 1 || offset.rows != self.rows {
            return Err(MatrixError::dimension_mismatch(
                "translate",
                self.shape(),
                offset.shape(),
            ));
        }
        Ok(self.map(|value, row, _| value + offset.at(row, 0)))
    }

    /// True when both matrices have the same shape and every pair of cells
    /// differs by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Renders `(a b\nc d)` with each value rounded to `places` decimals.
    #[must_use]
    pub fn format_places(&self, places: usize) -> String {
        let body = (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| format_number(self.at(row, col), places))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("({body})")
    }

    fn elementwise(
        &self,
        op: &'static str,
        rhs: Operand<'_>,
        f: impl Fn(f64, f64) -> f64,
    ) -> MatrixResult<Self> {
        match rhs {
            Operand::Scalar(scalar) => Ok(self.map(|value, _, _| f(value, scalar))),
            Operand::Matrix(other) => {
                if self.shape() != other.shape() {
                    return Err(MatrixError::dimension_mismatch(
                        op,
                        self.shape(),
                        other.shape(),
                    ));
                }
                Ok(self.map(|value, row, col| f(value, other.at(row, col))))
            }
        }
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Unchecked cell read; callers stay inside the shape.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}

/// Most decimals `format_number` honors; larger requests are clamped.
pub const MAX_PLACES: usize = 15;

/// Rounds `value` to `places` decimals, halves towards positive infinity,
/// and prints it without trailing zeros.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64, places: usize) -> String {
    let factor = 10_f64.powi(i32::try_from(places.min(MAX_PLACES)).unwrap_or(0));
    let rounded = (value * factor + 0.5).floor() / factor;
    // avoid printing "-0"
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        rounded.to_string()
    }
}

impl fmt::Display for Matrix {
    /// Uses the formatter precision as the number of decimals, 3 by default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_places(f.precision().unwrap_or(3)))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}
