//! Vouwt een geordende lijst transformaties over een puntenset.

use crate::matrix::{Matrix, MatrixError, MatrixResult};

use super::Transform;

/// Past `transforms` van links naar rechts toe op `points` (een 2xN matrix
/// met een kolom per punt).
///
/// Een translatie telt zijn kolom op bij elk punt; elke andere soort wordt van
/// links vermenigvuldigd met de lopende puntenset. De volgorde doet er dus
/// toe.
pub fn apply_all(points: &Matrix, transforms: &[Transform]) -> MatrixResult<Matrix> {
    transforms
        .iter()
        .try_fold(points.clone(), |current, transform| {
            let step = transform.matrix();
            log::debug!("{transform} -> {step}");
            if transform.is_additive() {
                current.translate_columns(&step)
            } else {
                step.multiply(&current)
            }
        })
}

/// Vouwt `transforms` samen tot één affiene afbeelding.
pub fn compose(transforms: &[Transform]) -> MatrixResult<AffineMap> {
    transforms
        .iter()
        .try_fold(AffineMap::identity(), |map, transform| map.then(transform))
}

/// Effectieve bewerking `p -> linear * p + offset` van een hele reeks.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMap {
    linear: Matrix,
    offset: Matrix,
}

impl AffineMap {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            linear: Matrix::identity(2),
            offset: Matrix::zeros(2, 1),
        }
    }

    /// Het lineaire deel (2x2 voor de gewone soorten).
    #[must_use]
    pub fn linear(&self) -> &Matrix {
        &self.linear
    }

    /// Het translatiedeel als kolom.
    #[must_use]
    pub fn offset(&self) -> &Matrix {
        &self.offset
    }

    /// Voegt `transform` toe ná de bewerkingen die al in deze afbeelding zitten.
    pub fn then(self, transform: &Transform) -> MatrixResult<Self> {
        let step = transform.matrix();
        if transform.is_additive() {
            Ok(Self {
                offset: self.offset.add(&step)?,
                linear: self.linear,
            })
        } else {
            Ok(Self {
                linear: step.multiply(&self.linear)?,
                offset: step.multiply(&self.offset)?,
            })
        }
    }

    /// Past de afbeelding toe op een puntenset.
    pub fn apply(&self, points: &Matrix) -> MatrixResult<Matrix> {
        self.linear.multiply(points)?.translate_columns(&self.offset)
    }

    /// Homogene `(n+1)x(n+1)` matrix `[[A, t], [0, 1]]`.
    pub fn to_homogeneous(&self) -> MatrixResult<Matrix> {
        let size = self.linear.rows();
        if !self.linear.is_square() || self.offset.shape() != (size, 1) {
            return Err(MatrixError::dimension_mismatch(
                "homogeneous",
                self.linear.shape(),
                self.offset.shape(),
            ));
        }
        Ok(Matrix::zeros(size + 1, size + 1).map(|_, row, col| {
            match (row < size, col < size) {
                (true, true) => self.linear.at(row, col),
                (true, false) => self.offset.at(row, 0),
                (false, true) => 0.0,
                (false, false) => 1.0,
            }
        }))
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}
