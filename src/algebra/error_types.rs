use thiserror::Error;

/// Error type returned by all fallible [`Matrix`](crate::algebra::Matrix)
/// and [`Vector`](crate::algebra::Vector) operations.
///
/// A failing operation never modifies its receiver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Operands or constructor rows have incompatible dimensions
    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A NaN value was supplied where a number is required
    #[error("Required a numeric value, found NaN")]
    NotANumber,
    /// Element or slice index lies outside the declared extent
    #[error("Index {index} out of bound {bound}")]
    IndexOutOfBounds { index: usize, bound: usize },
    /// Malformed constructor or selector argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Elementwise division by a zero factor
    #[error("Division by zero")]
    DivisionByZero,
    /// Vector product that has no algebraic definition here
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

// logs a rejected operation before handing the error back to the caller
pub(crate) fn reject<R>(op: &str, err: AlgebraError) -> Result<R, AlgebraError> {
    log::debug!("{op} rejected: {err}");
    Err(err)
}
