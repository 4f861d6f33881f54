use crate::algebra::error_types::reject;
use crate::algebra::*;
use itertools::iproduct;
use std::ops::Index;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Construct a matrix from a rectangular array of rows.
    ///
    /// Every row must have the same length as the first one, and there
    /// must be at least one row with at least one element.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, AlgebraError>
    where
        R: AsRef<[T]>,
    {
        let m = rows.len();
        let n = match rows.first() {
            Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
            _ => {
                let err = AlgebraError::InvalidArgument(
                    "at least one nonempty row is required".to_string(),
                );
                return reject("Matrix::from_rows", err);
            }
        };

        for row in rows.iter().map(AsRef::as_ref) {
            if row.len() != n {
                let err = AlgebraError::ShapeMismatch {
                    expected: (1, n),
                    found: (1, row.len()),
                };
                return reject("Matrix::from_rows", err);
            }
            if row.has_nan() {
                return reject("Matrix::from_rows", AlgebraError::NotANumber);
            }
        }

        let mut mat = Self {
            m,
            n,
            shape: MatrixShape::N,
            data: vec![T::zero(); m * n],
        };
        for (r, c) in mat.each_index() {
            let lidx = mat.index_linear((r, c));
            mat.data[lidx] = rows[r].as_ref()[c];
        }

        log::trace!("constructed {m}x{n} matrix");
        Ok(mat)
    }

    /// number of declared rows
    pub fn rows(&self) -> usize {
        self.m
    }

    /// number of declared columns
    pub fn cols(&self) -> usize {
        self.n
    }

    /// flat backing store
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_transposed(&self) -> bool {
        self.shape == MatrixShape::T
    }

    /// Toggle the virtual transpose.  The backing data is not touched.
    pub fn transpose(&mut self) -> &mut Self {
        self.shape = self.shape.flip();
        log::trace!("matrix orientation now {:?}", self.shape);
        self
    }

    /// Physical offset into [`data`](Matrix::data) of the logical
    /// element `(r, c)`.  No bounds checks are made.
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        let (r, c) = idx;
        let (stride_r, stride_c) = match self.shape {
            MatrixShape::N => (1, self.m),
            MatrixShape::T => (self.n, 1),
        };
        r * stride_r + c * stride_c
    }

    fn check_bounds(&self, r: usize, c: usize) -> Result<(), AlgebraError> {
        if r >= self.m {
            return Err(AlgebraError::IndexOutOfBounds {
                index: r,
                bound: self.m,
            });
        }
        if c >= self.n {
            return Err(AlgebraError::IndexOutOfBounds {
                index: c,
                bound: self.n,
            });
        }
        Ok(())
    }

    /// Element at logical position `(r, c)`
    pub fn get(&self, r: usize, c: usize) -> Result<T, AlgebraError> {
        if let Err(err) = self.check_bounds(r, c) {
            return reject("Matrix::get", err);
        }
        Ok(self.data[self.index_linear((r, c))])
    }

    /// Overwrite the element at logical position `(r, c)`
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<(), AlgebraError> {
        if let Err(err) = self.check_bounds(r, c) {
            return reject("Matrix::set", err);
        }
        if value.is_nan() {
            return reject("Matrix::set", AlgebraError::NotANumber);
        }
        let lidx = self.index_linear((r, c));
        self.data[lidx] = value;
        Ok(())
    }

    /// All logical `(r, c)` pairs, row by row.
    ///
    /// The returned iterator can be cloned to restart the enumeration.
    pub fn each_index(&self) -> impl Iterator<Item = (usize, usize)> + Clone {
        iproduct!(0..self.m, 0..self.n)
    }

    /// All elements in the order given by [`each_index`](Matrix::each_index)
    pub fn each(&self) -> impl Iterator<Item = T> + Clone + '_ {
        self.each_index().map(move |idx| self[idx])
    }

    /// Logical rows as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.m)
            .map(|r| (0..self.n).map(|c| self[(r, c)]).collect())
            .collect()
    }

    /// Rendering of the logical rows, one per line
    pub fn to_display_with(&self, settings: &FormatSettings) -> String {
        (0..self.m)
            .map(|r| settings.format_list((0..self.n).map(|c| self[(r, c)])))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_display(&self) -> String {
        self.to_display_with(&FormatSettings::default())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        self.shape
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // A =
        // [ 1.0  2.0  3.0 ]
        // [ 4.0  5.0  6.0 ]
        // [ 7.0  8.0  9.0 ]
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap()
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(1, 0)], 4.0);
        assert_eq!(matrix[(2, 0)], 7.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(2, 2)], 9.0);

        // column major storage
        assert_eq!(matrix.index_linear((0, 0)), 0);
        assert_eq!(matrix.index_linear((1, 0)), 1);
        assert_eq!(matrix.index_linear((2, 0)), 2);
        assert_eq!(matrix.index_linear((0, 1)), 3);
        assert_eq!(matrix.index_linear((1, 1)), 4);
        assert_eq!(matrix.index_linear((2, 2)), 8);
    }

    #[test]
    fn test_transposed_indexing() {
        let mut matrix = create_indexing_matrix();
        let data = matrix.data().to_vec();
        matrix.transpose();

        // row major reading of the same buffer
        assert_eq!(matrix.index_linear((0, 0)), 0);
        assert_eq!(matrix.index_linear((0, 1)), 1);
        assert_eq!(matrix.index_linear((0, 2)), 2);
        assert_eq!(matrix.index_linear((1, 0)), 3);
        assert_eq!(matrix.index_linear((2, 2)), 8);

        assert_eq!(matrix[(0, 1)], 4.0);
        assert_eq!(matrix[(1, 0)], 2.0);
        assert_eq!(matrix[(2, 0)], 3.0);
        assert_eq!(matrix.data(), &data[..]);
        assert_eq!(matrix.shape(), MatrixShape::T);
    }

    #[test]
    fn test_set_is_atomic() {
        let mut matrix = create_indexing_matrix();
        let original = matrix.clone();

        assert_eq!(
            matrix.set(3, 0, 1.0),
            Err(AlgebraError::IndexOutOfBounds { index: 3, bound: 3 })
        );
        assert_eq!(matrix.set(0, 0, f64::NAN), Err(AlgebraError::NotANumber));
        assert_eq!(matrix, original);

        matrix.set(1, 2, -6.0).unwrap();
        assert_eq!(matrix[(1, 2)], -6.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let matrix = create_indexing_matrix();
        let _ = matrix[(3, 0)];
    }
}
