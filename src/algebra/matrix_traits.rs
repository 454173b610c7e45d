#![allow(non_snake_case)]

use crate::algebra::{DenseMatrixMN, FloatT};

/// Dimension queries shared by the fixed-size matrix types.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Common access to the packed `N x N` storage types.
///
/// Packed types store only `N(N+1)/2` values.  [`get`](PackedMatrix::get)
/// reads any `(row, col)` pair, resolving the entries that are not stored
/// according to the structure of the type: mirrored for symmetric matrices,
/// zero for triangular ones.
pub trait PackedMatrix<T: FloatT, const N: usize>: ShapedMatrix {
    /// Packed data in row-major order
    fn data(&self) -> &[T];

    /// Mutable packed data in row-major order
    fn data_mut(&mut self) -> &mut [T];

    /// Position in [`data`](PackedMatrix::data) of a stored entry, or
    /// `None` for an implied zero.
    fn index_linear(&self, idx: (usize, usize)) -> Option<usize>;

    /// Value of entry `(row, col)`, including implied entries.
    fn get(&self, idx: (usize, usize)) -> T {
        match self.index_linear(idx) {
            Some(k) => self.data()[k],
            None => T::zero(),
        }
    }

    /// Expand to a full row-major matrix.
    fn to_dense(&self) -> DenseMatrixMN<N, N, T> {
        let mut A = DenseMatrixMN::zeros();
        for r in 0..N {
            for c in 0..N {
                A.data[r][c] = self.get((r, c));
            }
        }
        A
    }

    /// Product of the diagonal entries
    fn diag_prod(&self) -> T {
        (0..N).fold(T::one(), |p, i| p * self.get((i, i)))
    }

    /// Product of the diagonal magnitudes, the natural scale of the
    /// determinant of a matrix with this diagonal.
    fn diag_abs_prod(&self) -> T {
        (0..N).fold(T::one(), |p, i| p * self.get((i, i)).abs())
    }
}
