#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Matrix orientation marker
///
/// A [`Matrix`](crate::algebra::Matrix) in orientation `N` stores its
/// data column-major.   In orientation `T` the same buffer is read
/// row-major, i.e. the matrix is virtually transposed.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixShape {
    /// Normal matrix orientation
    #[default]
    N,
    /// Transposed matrix orientation
    T,
}

impl MatrixShape {
    /// the opposite orientation
    pub fn flip(self) -> Self {
        match self {
            MatrixShape::N => MatrixShape::T,
            MatrixShape::T => MatrixShape::N,
        }
    }
}

/// Vector orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Column vector, shape `(dim, 1)`
    #[default]
    Column,
    /// Row vector, shape `(1, dim)`
    Row,
}

impl Orientation {
    /// the opposite orientation
    pub fn flip(self) -> Self {
        match self {
            Orientation::Column => Orientation::Row,
            Orientation::Row => Orientation::Column,
        }
    }
}
