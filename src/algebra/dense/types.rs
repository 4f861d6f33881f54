use crate::algebra::{AlgebraError, FloatT, MatrixShape};
#[cfg(feature = "serde")]
use crate::algebra::error_types::reject;
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense matrix with a virtual transpose
///
/// Data is held in a single flat buffer of length `rows * cols`.  In the
/// normal orientation the buffer is read column-major.   Calling
/// [`transpose`](Matrix::transpose) toggles the orientation flag so that
/// the same buffer is read row-major instead; the data itself is never
/// moved.  The declared `rows` and `cols` are fixed at construction.
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [1.  2.  3.]
///     [4.  5.  6.]
/// ```
///
/// ```
/// use densealg::algebra::*;
///
/// let A = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]).unwrap();
///
/// assert_eq!(A.size(), (2, 3));
/// assert_eq!(A.get(1, 0), Ok(4.));
/// assert_eq!(A.data(), &[1., 4., 2., 5., 3., 6.]);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "MatrixParts<T>",
        bound = "T: FloatT + Serialize + DeserializeOwned"
    )
)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// storage orientation
    pub(crate) shape: MatrixShape,
    /// flat element buffer of length `m * n`
    pub(crate) data: Vec<T>,
}

// unchecked field image of a Matrix, validated on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub(crate) struct MatrixParts<T> {
    m: usize,
    n: usize,
    shape: MatrixShape,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: FloatT> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = AlgebraError;
    fn try_from(parts: MatrixParts<T>) -> Result<Self, Self::Error> {
        let MatrixParts { m, n, shape, data } = parts;
        Matrix::from_parts(m, n, shape, data).or_else(|err| reject("Matrix::deserialize", err))
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    // direct assembly from fields, checking the storage invariants
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn from_parts(
        m: usize,
        n: usize,
        shape: MatrixShape,
        data: Vec<T>,
    ) -> Result<Self, AlgebraError> {
        if m == 0 || n == 0 {
            return Err(AlgebraError::InvalidArgument(
                "matrix dimensions must be nonzero".to_string(),
            ));
        }
        if m.checked_mul(n) != Some(data.len()) {
            return Err(AlgebraError::ShapeMismatch {
                expected: (m, n),
                found: (data.len(), 1),
            });
        }
        if data.iter().any(|x| x.is_nan()) {
            return Err(AlgebraError::NotANumber);
        }
        Ok(Self { m, n, shape, data })
    }
}
