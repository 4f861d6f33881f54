//! Dense [`Matrix`] and [`Vector`] types and their supporting traits.
//!
//! All fallible operations return [`AlgebraError`].  Vector arithmetic is
//! expressed through the [`VectorMath`] slice kernels, which are also
//! usable directly on `[T]` for any [`FloatT`].

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod settings;
mod vecmath;
mod vector;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use settings::*;
pub use vector::*;
