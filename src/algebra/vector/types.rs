use crate::algebra::error_types::reject;
use crate::algebra::{AlgebraError, FloatT, Orientation, VectorMath};
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense vector of arbitrary length with a row / column orientation
///
/// The orientation decides the reported [`size`](crate::algebra::ShapedMatrix::size)
/// (`(dim, 1)` for a column, `(1, dim)` for a row) and which vector products
/// are defined.  New vectors are column vectors.
///
/// __Example usage__ :
///
/// ```
/// use densealg::algebra::*;
///
/// let x = Vector::from_values(vec![1., 2., 3.]).unwrap();
/// let mut y = Vector::generate(3, |i| (i + 4) as f64).unwrap();
///
/// assert_eq!(y.size(), (3, 1));
/// y.transpose();
/// assert_eq!(y.size(), (1, 3));
///
/// // row times column is the dot product
/// assert_eq!(y.dot(&x), Ok(32.));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "VectorParts<T>",
        bound = "T: FloatT + Serialize + DeserializeOwned"
    )
)]
pub struct Vector<T = f64> {
    /// row or column orientation
    pub(crate) orientation: Orientation,
    /// vector elements
    pub(crate) values: Vec<T>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub(crate) struct VectorParts<T> {
    orientation: Orientation,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: FloatT> TryFrom<VectorParts<T>> for Vector<T> {
    type Error = AlgebraError;
    fn try_from(parts: VectorParts<T>) -> Result<Self, Self::Error> {
        Vector::from_parts("Vector::deserialize", parts.values, parts.orientation)
    }
}

impl<T: FloatT> TryFrom<Vec<T>> for Vector<T> {
    type Error = AlgebraError;
    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Vector::from_values(values)
    }
}

impl<T> Vector<T>
where
    T: FloatT,
{
    // every constructor and arithmetic result funnels through here.
    // `op` names the public operation in the rejection log.
    pub(crate) fn from_parts(
        op: &str,
        values: Vec<T>,
        orientation: Orientation,
    ) -> Result<Self, AlgebraError> {
        if values.has_nan() {
            return reject(op, AlgebraError::NotANumber);
        }
        Ok(Self {
            orientation,
            values,
        })
    }
}
