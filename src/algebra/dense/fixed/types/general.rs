#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

// statically sized general (possibly non-square) matrix
//
// Data is stored row-major as R arrays of C values, so a
// literal [[a, b, c], [d, e, f]] reads the way it prints.

/// Fixed-size `R x C` dense matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseMatrixMN<const R: usize, const C: usize, T = f64> {
    pub data: [[T; C]; R],
}

/// 3x3 dense matrix
pub type DenseMatrix3<T = f64> = DenseMatrixMN<3, 3, T>;

impl<const R: usize, const C: usize, T: FloatT> DenseMatrixMN<R, C, T> {
    pub const fn new(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    pub fn transpose(&self) -> DenseMatrixMN<C, R, T> {
        let mut At = DenseMatrixMN::<C, R, T>::zeros();
        for (r, row) in self.data.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                At.data[c][r] = v;
            }
        }
        At
    }

    /// out = self * B
    pub fn mul_mat_vout<const K: usize>(
        &self,
        B: &DenseMatrixMN<C, K, T>,
        out: &mut DenseMatrixMN<R, K, T>,
    ) {
        for (orow, arow) in out.data.iter_mut().zip(self.data.iter()) {
            for (k, o) in orow.iter_mut().enumerate() {
                *o = arow
                    .iter()
                    .zip(B.data.iter())
                    .fold(T::zero(), |acc, (&a, brow)| acc + a * brow[k]);
            }
        }
    }

    /// Largest absolute elementwise difference to `B`
    pub fn norm_inf_diff(&self, B: &Self) -> T {
        self.data
            .iter()
            .flatten()
            .zip(B.data.iter().flatten())
            .fold(T::zero(), |m, (&a, &b)| T::max(m, (a - b).abs()))
    }
}

impl<const N: usize, T: FloatT> DenseMatrixMN<N, N, T> {
    pub fn identity() -> Self {
        let mut A = Self::zeros();
        for i in 0..N {
            A.data[i][i] = T::one();
        }
        A
    }
}

impl<const R: usize, const C: usize, T: FloatT> Default for DenseMatrixMN<R, C, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize, T> From<[[T; C]; R]> for DenseMatrixMN<R, C, T> {
    fn from(data: [[T; C]; R]) -> Self {
        Self { data }
    }
}

impl<const R: usize, const C: usize, T> ShapedMatrix for DenseMatrixMN<R, C, T> {
    fn nrows(&self) -> usize {
        R
    }
    fn ncols(&self) -> usize {
        C
    }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for DenseMatrixMN<R, C, T> {
    type Output = T;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[idx.0][idx.1]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for DenseMatrixMN<R, C, T> {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        &mut self.data[idx.0][idx.1]
    }
}

#[test]
fn test_dense_mul_mat() {
    #[rustfmt::skip]
    let A = DenseMatrixMN::from([
        [1., 2., 3.],
        [4., 5., 6.],
    ]);
    let B = A.transpose();
    assert_eq!(B[(2, 1)], 6.);
    assert_eq!(B.size(), (3, 2));

    let mut AB = DenseMatrixMN::<2, 2, f64>::zeros();
    A.mul_mat_vout(&B, &mut AB);
    assert_eq!(AB.data, [[14., 32.], [32., 77.]]);

    let I = DenseMatrix3::<f64>::identity();
    let mut C = DenseMatrixMN::<2, 3, f64>::zeros();
    A.mul_mat_vout(&I, &mut C);
    assert_eq!(C, A);
    assert_eq!(C.norm_inf_diff(&A), 0.);
}
