//! Determinant, adjugate and inverse by cofactor expansion.
//!
//! Expansion is exponential in the matrix size. The engine only ever sees
//! demo-scale input (n <= 5), where that does not matter.

use super::dense::Matrix;
use super::error::{MatrixError, MatrixResult};

impl Matrix {
    /// Submatrix without row `skip_row` and column `skip_col`.
    ///
    /// Returns `None` when either index lies outside the matrix.
    #[must_use]
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> Option<Matrix> {
        (skip_row < self.rows() && skip_col < self.cols())
            .then(|| self.strike(skip_row, skip_col))
    }

    /// Determinant via cofactor expansion along the first row.
    ///
    /// A 0x0 matrix has determinant 1.
    pub fn determinant(&self) -> MatrixResult<f64> {
        if !self.is_square() {
            return Err(MatrixError::not_square("determinant", self.shape()));
        }
        Ok(self.expand())
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> MatrixResult<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::not_square("adjugate", self.shape()));
        }
        Ok(self.cofactors().transpose())
    }

    /// `adjugate / determinant`; fails with [`MatrixError::Singular`] when the
    /// determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> MatrixResult<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::not_square("inverse", self.shape()));
        }
        let determinant = self.expand();
        if determinant == 0.0 {
            return Err(MatrixError::singular());
        }
        self.cofactors().transpose().multiply(1.0 / determinant)
    }

    fn expand(&self) -> f64 {
        match self.rows() {
            0 => 1.0,
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            size => {
                let mut determinant = 0.0;
                for col in 0..size {
                    determinant +=
                        sign(col) * self.at(0, col) * self.strike(0, col).expand();
                }
                determinant
            }
        }
    }

    fn cofactors(&self) -> Matrix {
        self.map(|_, row, col| sign(row + col) * self.strike(row, col).expand())
    }

    fn strike(&self, skip_row: usize, skip_col: usize) -> Matrix {
        Matrix::zeros(self.rows() - 1, self.cols() - 1).map(|_, row, col| {
            let source_row = if row < skip_row { row } else { row + 1 };
            let source_col = if col < skip_col { col } else { col + 1 };
            self.at(source_row, source_col)
        })
    }
}

fn sign(index: usize) -> f64 {
    if index % 2 == 0 { 1.0 } else { -1.0 }
}
