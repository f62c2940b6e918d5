use thiserror::Error;

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Failures of the matrix engine. Each one is also logged as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for `op`.
    #[error("{op}: dimension mismatch between {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// `op` needs a square matrix.
    #[error("{op}: matrix must be square, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
    /// The determinant is zero, so no inverse exists.
    #[error("inverse: the determinant of the matrix is zero")]
    Singular,
    /// A nested row list had rows of different lengths.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl MatrixError {
    pub(crate) fn dimension_mismatch(
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch { op, left, right }.logged()
    }

    pub(crate) fn not_square(op: &'static str, (rows, cols): (usize, usize)) -> Self {
        Self::NotSquare { op, rows, cols }.logged()
    }

    pub(crate) fn singular() -> Self {
        Self::Singular.logged()
    }

    /// Emits the diagnostic on the operator log and hands the error back.
    fn logged(self) -> Self {
        log::warn!("{self}");
        self
    }
}
