// All vector arithmetic on Vector values goes through these
// slice kernels, implemented generically for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)
pub trait VectorMath {
    type T;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Apply an elementwise operation to `v` and assign the
    /// results to `self`.
    fn scalarop_from(&mut self, op: impl Fn(Self::T) -> Self::T, v: &Self) -> &mut Self;

    /// Apply a binary elementwise operation to `x` and `y` and
    /// assign the results to `self`.
    fn zipop_from(
        &mut self,
        op: impl Fn(Self::T, Self::T) -> Self::T,
        x: &Self,
        y: &Self,
    ) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of squares of the elements.
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// One norm
    fn norm_one(&self) -> Self::T;

    /// true if any element is NaN
    fn has_nan(&self) -> bool;
}
