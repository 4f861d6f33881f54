use crate::algebra::error_types::reject;
use crate::algebra::*;
use std::ops::{Bound, Index, RangeBounds};

/// Result of [`Vector::slice`]
#[derive(Debug, Clone, PartialEq)]
pub enum Slice<T = f64> {
    /// a range covering a single index
    Scalar(T),
    /// an independent copy of a longer range
    Vector(Vector<T>),
}

impl<T> Vector<T>
where
    T: FloatT,
{
    /// Column vector holding `values`
    pub fn from_values(values: Vec<T>) -> Result<Self, AlgebraError> {
        let v = Self::from_parts("Vector::from_values", values, Orientation::Column)?;
        log::trace!("constructed vector of dim {}", v.length());
        Ok(v)
    }

    /// Column vector of length `dim` with element `i` given by `f(i)`
    pub fn generate<F>(dim: usize, f: F) -> Result<Self, AlgebraError>
    where
        F: FnMut(usize) -> T,
    {
        Self::from_values((0..dim).map(f).collect())
    }

    /// Flip between row and column orientation
    pub fn transpose(&mut self) -> &mut Self {
        self.orientation = self.orientation.flip();
        log::trace!("vector orientation now {:?}", self.orientation);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_column(&self) -> bool {
        self.orientation == Orientation::Column
    }

    /// Number of elements, regardless of orientation
    pub fn length(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Element at index `i`
    pub fn at(&self, i: usize) -> Result<T, AlgebraError> {
        match self.values.get(i) {
            Some(&v) => Ok(v),
            None => reject(
                "Vector::at",
                AlgebraError::IndexOutOfBounds {
                    index: i,
                    bound: self.length(),
                },
            ),
        }
    }

    /// Copy out the elements covered by `range`.
    ///
    /// Both ends of the range must lie inside the vector, otherwise
    /// `IndexOutOfBounds` is returned.  An empty or reversed range is an
    /// `InvalidArgument`.  A range covering one index yields that element,
    /// a longer one yields a new column vector.
    pub fn slice<R>(&self, range: R) -> Result<Slice<T>, AlgebraError>
    where
        R: RangeBounds<usize>,
    {
        let dim = self.length();
        let out_of_bounds = |index| AlgebraError::IndexOutOfBounds { index, bound: dim };

        let first = match range.start_bound() {
            Bound::Included(&a) => Some(a),
            Bound::Excluded(&a) => a.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let last = match range.end_bound() {
            Bound::Included(&b) => Some(b),
            Bound::Excluded(&b) => b.checked_sub(1),
            Bound::Unbounded => dim.checked_sub(1),
        };

        // an endpoint outside the vector wins over an empty range
        let first = match first {
            Some(a) if a < dim => a,
            a => return reject("Vector::slice", out_of_bounds(a.unwrap_or(usize::MAX))),
        };
        let last = match last {
            Some(b) if b >= dim => return reject("Vector::slice", out_of_bounds(b)),
            Some(b) if b >= first => b,
            _ => {
                let err = AlgebraError::InvalidArgument(format!(
                    "empty slice range {:?}..{:?}",
                    range.start_bound(),
                    range.end_bound()
                ));
                return reject("Vector::slice", err);
            }
        };

        if first == last {
            Ok(Slice::Scalar(self.values[first]))
        } else {
            let values = self.values[first..=last].to_vec();
            let v = Self::from_parts("Vector::slice", values, Orientation::Column)?;
            Ok(Slice::Vector(v))
        }
    }

    /// Bracketed element list, followed by the column marker
    /// for column vectors
    pub fn to_display_with(&self, settings: &FormatSettings) -> String {
        let marker = if self.is_column() {
            settings.column_marker.as_str()
        } else {
            ""
        };
        format!("{}{}", settings.format_list(self.iter()), marker)
    }

    pub fn to_display(&self) -> String {
        self.to_display_with(&FormatSettings::default())
    }

    pub fn inspect(&self) -> String {
        format!(
            "<Vector dim = {} values = {:?}>",
            self.length(),
            self.values
        )
    }
}

impl<T> Index<usize> for Vector<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.values[i]
    }
}

impl<T> ShapedMatrix for Vector<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        match self.orientation {
            Orientation::Column => self.length(),
            Orientation::Row => 1,
        }
    }
    fn ncols(&self) -> usize {
        match self.orientation {
            Orientation::Column => 1,
            Orientation::Row => self.length(),
        }
    }
    fn shape(&self) -> MatrixShape {
        match self.orientation {
            Orientation::Column => MatrixShape::N,
            Orientation::Row => MatrixShape::T,
        }
    }
}

impl<T> std::fmt::Display for Vector<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_display())
    }
}
