//! Randomly generated multiplication and inversion examples.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::matrix::{Matrix, MatrixResult};

/// One product `left * right` and one inversion, with small integer entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleOperations {
    pub left: Matrix,
    pub right: Matrix,
    pub product: Matrix,
    pub square: Matrix,
    /// `None` when `square` happens to be singular.
    pub inverse: Option<Matrix>,
}

impl ExampleOperations {
    /// Draws sizes in `2..=3` and entries in `0..=9`.
    pub fn generate<R: Rng>(rng: &mut R) -> MatrixResult<Self> {
        let sizes: [usize; 4] = std::array::from_fn(|_| rng.random_range(2..=3));
        let left = random_matrix(rng, sizes[0], sizes[1]);
        let right = random_matrix(rng, left.cols(), sizes[2]);
        let square = random_matrix(rng, sizes[3], sizes[3]);

        let product = left.multiply(&right)?;
        let inverse = square.inverse().ok();
        log::debug!(
            "voorbeeld: {}x{} * {}x{}, inverse van {}x{} {}",
            sizes[0],
            sizes[1],
            sizes[1],
            sizes[2],
            sizes[3],
            sizes[3],
            if inverse.is_some() { "bestaat" } else { "bestaat niet" }
        );

        Ok(Self {
            left,
            right,
            product,
            square,
            inverse,
        })
    }
}

fn random_matrix<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Matrix {
    Matrix::zeros(rows, cols).map(|_, _, _| f64::from(rng.random_range(0..10_u8)))
}

impl fmt::Display for ExampleOperations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix Multiplication")?;
        writeln!(f, "{}\nx\n{}\n=\n{}", self.left, self.right, self.product)?;
        writeln!(f)?;
        writeln!(f, "Matrix Inversion")?;
        match &self.inverse {
            Some(inverse) => write!(f, "{}^-1\n=\n{inverse}", self.square),
            None => write!(f, "{}^-1\n=\nInvalid matrix", self.square),
        }
    }
}
