use crate::algebra::error_types::reject;
use crate::algebra::*;

/// Right hand operand of [`Vector::multiply`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor<'a, T = f64> {
    Scalar(T),
    Vector(&'a Vector<T>),
}

/// Result of [`Vector::multiply`]
#[derive(Debug, Clone, PartialEq)]
pub enum Product<T = f64> {
    /// scaled vector
    Vector(Vector<T>),
    /// dot product
    Scalar(T),
}

macro_rules! impl_scalar_factor {
    ($ty:ty) => {
        impl<'a> From<$ty> for Factor<'a, $ty> {
            fn from(c: $ty) -> Self {
                Factor::Scalar(c)
            }
        }
    };
}
impl_scalar_factor!(f32);
impl_scalar_factor!(f64);

impl<'a, T> From<&'a Vector<T>> for Factor<'a, T> {
    fn from(v: &'a Vector<T>) -> Self {
        Factor::Vector(v)
    }
}

impl<T> Vector<T>
where
    T: FloatT,
{
    fn check_same_size(&self, op: &str, other: &Self) -> Result<(), AlgebraError> {
        if self.size() != other.size() {
            let err = AlgebraError::ShapeMismatch {
                expected: self.size(),
                found: other.size(),
            };
            return reject(op, err);
        }
        Ok(())
    }

    fn check_number(op: &str, c: T) -> Result<(), AlgebraError> {
        if c.is_nan() {
            return reject(op, AlgebraError::NotANumber);
        }
        Ok(())
    }

    // new vector from elementwise `f(self[i], other[i])`, keeping
    // the orientation of self
    fn zip_with(
        &self,
        op: &str,
        f: impl Fn(T, T) -> T,
        other: &Self,
    ) -> Result<Self, AlgebraError> {
        let mut values = vec![T::zero(); self.length()];
        values.zipop_from(f, &self.values, &other.values);
        Self::from_parts(op, values, self.orientation)
    }

    fn map_values(&self, op: &str, f: impl Fn(T) -> T) -> Result<Self, AlgebraError> {
        let mut values = vec![T::zero(); self.length()];
        values.scalarop_from(f, &self.values);
        Self::from_parts(op, values, self.orientation)
    }

    /// Elementwise sum.  Sizes and orientations must agree.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_size("Vector::add", other)?;
        self.zip_with("Vector::add", |x, y| x + y, other)
    }

    /// Elementwise difference.  Sizes and orientations must agree.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_same_size("Vector::sub", other)?;
        self.zip_with("Vector::sub", |x, y| x - y, other)
    }

    pub fn scale(&self, c: T) -> Result<Self, AlgebraError> {
        Self::check_number("Vector::scale", c)?;
        let mut values = self.values.clone();
        values.scale(c);
        Self::from_parts("Vector::scale", values, self.orientation)
    }

    pub fn divide(&self, c: T) -> Result<Self, AlgebraError> {
        Self::check_number("Vector::divide", c)?;
        if c == T::zero() {
            return reject("Vector::divide", AlgebraError::DivisionByZero);
        }
        self.map_values("Vector::divide", |x| x / c)
    }

    /// Product of a row vector with a column vector of the same length.
    ///
    /// Products with a column vector on the left, or of two row vectors,
    /// are reported as not implemented.
    pub fn dot(&self, other: &Self) -> Result<T, AlgebraError> {
        if self.is_column() {
            let err = AlgebraError::NotImplemented("product with a column vector on the left");
            return reject("Vector::dot", err);
        }
        if !other.is_column() {
            let err = AlgebraError::NotImplemented("product of two row vectors");
            return reject("Vector::dot", err);
        }
        if self.length() != other.length() {
            let err = AlgebraError::ShapeMismatch {
                expected: (self.length(), 1),
                found: other.size(),
            };
            return reject("Vector::dot", err);
        }

        let dot = self.values.dot(&other.values);
        Self::check_number("Vector::dot", dot)?;
        Ok(dot)
    }

    /// Scaling by a number, or the [`dot`](Vector::dot) product with
    /// another vector.
    pub fn multiply<'a, F>(&self, factor: F) -> Result<Product<T>, AlgebraError>
    where
        F: Into<Factor<'a, T>>,
        T: 'a,
    {
        match factor.into() {
            Factor::Scalar(c) => self.scale(c).map(Product::Vector),
            Factor::Vector(v) => self.dot(v).map(Product::Scalar),
        }
    }
}
