use crate::algebra::error_types::reject;
use crate::algebra::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vector norm selector
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormType {
    /// sum of absolute values
    L1,
    /// Euclidean norm
    #[default]
    L2,
    /// largest absolute value
    Linf,
}

impl FromStr for NormType {
    type Err = AlgebraError;

    /// Parses `"L1"`, `"L2"` or `"Linf"`, optionally written
    /// with a leading `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(':').unwrap_or(s) {
            "L1" => Ok(NormType::L1),
            "L2" => Ok(NormType::L2),
            "Linf" => Ok(NormType::Linf),
            _ => Err(AlgebraError::InvalidArgument(format!(
                "unknown norm \"{s}\", expected one of L1, L2, Linf"
            ))),
        }
    }
}

impl<T> Vector<T>
where
    T: FloatT,
{
    /// Norm of the vector.  Empty vectors have norm zero.
    pub fn norm(&self, kind: NormType) -> T {
        match kind {
            NormType::L1 => self.values.norm_one(),
            NormType::L2 => self.values.norm(),
            NormType::Linf => self.values.norm_inf(),
        }
    }

    /// [`norm`](Vector::norm) with the kind given by name
    pub fn norm_by_name(&self, name: &str) -> Result<T, AlgebraError> {
        match name.parse::<NormType>() {
            Ok(kind) => Ok(self.norm(kind)),
            Err(err) => reject("Vector::norm_by_name", err),
        }
    }
}
