use crate::algebra::MatrixShape;

/// Common dimension queries for matrix-like objects
///
/// Vectors implement this trait too, presenting themselves
/// as `n x 1` (column) or `1 x n` (row) matrices.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// orientation of the object relative to its storage
    fn shape(&self) -> MatrixShape;
    /// `(nrows, ncols)`
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if `nrows == ncols`
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
