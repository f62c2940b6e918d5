//! Point sets and the preset shapes offered to the user.

use crate::matrix::{Matrix, MatrixError, MatrixResult};
use crate::transform::{Transform, apply_all};

/// A shape stored as a `2 x N` matrix: row 0 holds the x coordinates, row 1
/// the y coordinates, one column per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    points: Matrix,
}

impl Shape {
    /// Wraps an existing point matrix; it must have exactly two rows.
    pub fn new(points: Matrix) -> MatrixResult<Self> {
        if points.rows() != 2 {
            return Err(MatrixError::dimension_mismatch(
                "shape",
                points.shape(),
                (2, points.cols()),
            ));
        }
        Ok(Self { points })
    }

    /// Builds a shape from `[x, y]` vertex pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        let points = Matrix::zeros(2, pairs.len()).map(|_, row, col| pairs[col][row]);
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &Matrix {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.cols()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.cols() == 0
    }

    /// Vertices as `[x, y]` pairs, in drawing order.
    #[must_use]
    pub fn vertices(&self) -> Vec<[f64; 2]> {
        (0..self.points.cols())
            .map(|col| [self.points.at(0, col), self.points.at(1, col)])
            .collect()
    }

    /// Appends `[x, y]` vertex pairs.
    pub fn add_points(&mut self, pairs: &[[f64; 2]]) {
        let mut vertices = self.vertices();
        vertices.extend_from_slice(pairs);
        *self = Self::from_pairs(&vertices);
    }

    /// Appends the columns of a `2 x M` matrix.
    pub fn extend(&mut self, points: &Matrix) -> MatrixResult<()> {
        let other = Shape::new(points.clone())?;
        self.add_points(&other.vertices());
        Ok(())
    }

    /// New shape with the transform chain applied; `self` stays untouched.
    pub fn transform(&self, transforms: &[Transform]) -> MatrixResult<Self> {
        Self::new(apply_all(&self.points, transforms)?)
    }

    /// New shape obtained by left-multiplying the points with `matrix`.
    pub fn transform_with(&self, matrix: &Matrix) -> MatrixResult<Self> {
        Self::new(matrix.multiply(&self.points)?)
    }
}

/// The shapes a user can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Hourglass,
    Star,
}

impl ShapeKind {
    pub const ALL: &'static [ShapeKind] = &[
        Self::Triangle,
        Self::Square,
        Self::Pentagon,
        Self::Hexagon,
        Self::Heptagon,
        Self::Octagon,
        Self::Hourglass,
        Self::Star,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Heptagon => "heptagon",
            Self::Octagon => "octagon",
            Self::Hourglass => "hourglass",
            Self::Star => "star",
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == normalized)
    }

    /// Vertices inside a 32x32 box with the origin at the lower-left corner.
    #[must_use]
    pub fn vertices(self) -> &'static [[f64; 2]] {
        match self {
            Self::Triangle => &[[0.0, 0.0], [32.0, 0.0], [16.0, 32.0]],
            Self::Square => &[[0.0, 0.0], [32.0, 0.0], [32.0, 32.0], [0.0, 32.0]],
            Self::Pentagon => &[[0.0, 16.0], [8.0, 0.0], [24.0, 0.0], [32.0, 16.0], [16.0, 32.0]],
            Self::Hexagon => &[
                [0.0, 16.0],
                [8.0, 0.0],
                [24.0, 0.0],
                [32.0, 16.0],
                [24.0, 32.0],
                [8.0, 32.0],
            ],
            Self::Heptagon => &[
                [0.0, 8.0],
                [8.0, 0.0],
                [24.0, 0.0],
                [32.0, 8.0],
                [32.0, 24.0],
                [16.0, 32.0],
                [0.0, 24.0],
            ],
            Self::Octagon => &[
                [0.0, 8.0],
                [8.0, 0.0],
                [24.0, 0.0],
                [32.0, 8.0],
                [32.0, 24.0],
                [24.0, 32.0],
                [8.0, 32.0],
                [0.0, 24.0],
            ],
            Self::Hourglass => &[
                [8.0, 0.0],
                [24.0, 0.0],
                [16.0, 16.0],
                [24.0, 32.0],
                [8.0, 32.0],
                [16.0, 16.0],
            ],
            Self::Star => &[
                [0.0, 16.0],
                [12.0, 12.0],
                [16.0, 0.0],
                [20.0, 12.0],
                [32.0, 16.0],
                [20.0, 20.0],
                [16.0, 32.0],
                [12.0, 20.0],
            ],
        }
    }

    #[must_use]
    pub fn shape(self) -> Shape {
        Shape::from_pairs(self.vertices())
    }
}

#[cfg(test)]
mod tests {
    use super::{Shape, ShapeKind};
    use crate::matrix::{Matrix, MatrixError};
    use crate::transform::Transform;

    #[test]
    fn pairs_are_stored_column_wise() {
        let shape = Shape::from_pairs(&[[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]);
        assert_eq!(shape.points().shape(), (2, 3));
        assert_eq!(shape.points().row(0), Some(&[0.0, 2.0, 4.0][..]));
        assert_eq!(shape.points().row(1), Some(&[1.0, 3.0, 5.0][..]));
        assert_eq!(shape.vertices(), vec![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]);
    }

    #[test]
    fn new_requires_two_rows() {
        assert!(Shape::new(Matrix::zeros(2, 4)).is_ok());
        assert!(matches!(
            Shape::new(Matrix::zeros(3, 4)),
            Err(MatrixError::DimensionMismatch { op: "shape", .. })
        ));
    }

    #[test]
    fn add_points_appends_vertices() {
        let mut shape = Shape::from_pairs(&[[0.0, 0.0]]);
        shape.add_points(&[[1.0, 1.0], [2.0, 0.0]]);
        assert_eq!(shape.len(), 3);

        let extra = Matrix::from_rows(&[[5.0], [6.0]]).unwrap();
        shape.extend(&extra).unwrap();
        assert_eq!(shape.vertices().last(), Some(&[5.0, 6.0]));
        assert!(shape.extend(&Matrix::zeros(1, 1)).is_err());
    }

    #[test]
    fn transform_leaves_original_untouched() {
        let original = ShapeKind::Square.shape();
        let scaled = original
            .transform(&[Transform::Scale { sx: 0.5, sy: 2.0 }])
            .unwrap();
        assert_eq!(original, ShapeKind::Square.shape());
        assert_eq!(scaled.vertices()[2], [16.0, 64.0]);
    }

    #[test]
    fn transform_with_matrix_multiplies_from_left() {
        let shape = Shape::from_pairs(&[[1.0, 2.0]]);
        let swap = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
        assert_eq!(shape.transform_with(&swap).unwrap().vertices(), vec![[2.0, 1.0]]);
    }

    #[test]
    fn catalog_lookup_and_sizes() {
        assert_eq!(ShapeKind::from_name(" Star "), Some(ShapeKind::Star));
        assert_eq!(ShapeKind::from_name("circle"), None);
        let sizes: Vec<usize> = ShapeKind::ALL.iter().map(|kind| kind.shape().len()).collect();
        assert_eq!(sizes, vec![3, 4, 5, 6, 7, 8, 6, 8]);
    }
}
