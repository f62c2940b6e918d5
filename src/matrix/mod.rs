//! Dense matrix algebra used by the transform pipeline and the example
//! operations.

mod cofactor;
mod dense;
mod error;

pub use dense::{MAX_PLACES, Matrix, Operand, format_number};
pub use error::{MatrixError, MatrixResult};

#[cfg(test)]
mod tests;
