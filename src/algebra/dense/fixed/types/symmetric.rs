#![allow(non_snake_case)]

use crate::algebra::scalarmath::{triangular_number, triu_index};
use crate::algebra::*;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_big_array::BigArray;

// statically sized symmetric matrix type
//
// Data is stored as an array of S values belonging to the upper
// triangle of an N x N matrix, row by row.  The lower triangle is
// implied equal to its mirror, so both (i,j) and (j,i) read the
// same stored value.
//
// NB: S = N(N+1)/2 cannot be written in the type definition on
// stable Rust, so both dimensions are parameters and the relation
// is checked at compile time when a kernel is instantiated.

/// Packed symmetric `N x N` matrix, row-major upper triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct DenseMatrixSymN<const N: usize, const S: usize, T = f64> {
    #[cfg_attr(feature = "serde", serde(with = "BigArray"))]
    pub data: [T; S],
}

pub type DenseMatrixSym2<T = f64> = DenseMatrixSymN<2, 3, T>;
pub type DenseMatrixSym3<T = f64> = DenseMatrixSymN<3, 6, T>;
pub type DenseMatrixSym4<T = f64> = DenseMatrixSymN<4, 10, T>;
pub type DenseMatrixSym5<T = f64> = DenseMatrixSymN<5, 15, T>;
pub type DenseMatrixSym6<T = f64> = DenseMatrixSymN<6, 21, T>;

impl<const N: usize, const S: usize, T> DenseMatrixSymN<N, S, T> {
    pub(crate) const PACKED: () = assert!(
        triangular_number(N) == S,
        "packed symmetric storage must hold N(N+1)/2 values"
    );

    pub const fn new(data: [T; S]) -> Self {
        let () = Self::PACKED;
        Self { data }
    }

    pub const fn dim(&self) -> usize {
        N
    }
}

impl<const N: usize, const S: usize, T: FloatT> DenseMatrixSymN<N, S, T> {
    pub fn zeros() -> Self {
        Self::new([T::zero(); S])
    }

    pub fn identity() -> Self {
        let mut A = Self::zeros();
        for i in 0..N {
            A[(i, i)] = T::one();
        }
        A
    }
}

impl<const N: usize, const S: usize, T: FloatT> Default for DenseMatrixSymN<N, S, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize, const S: usize, T> From<[T; S]> for DenseMatrixSymN<N, S, T> {
    fn from(data: [T; S]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize, const S: usize, T> ShapedMatrix for DenseMatrixSymN<N, S, T> {
    fn nrows(&self) -> usize {
        N
    }
    fn ncols(&self) -> usize {
        N
    }
}

impl<const N: usize, const S: usize, T: FloatT> PackedMatrix<T, N> for DenseMatrixSymN<N, S, T> {
    #[inline]
    fn data(&self) -> &[T] {
        &self.data
    }
    #[inline]
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
    //convert row col coordinate to triu index
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> Option<usize> {
        let (r, c) = idx;
        if r <= c {
            Some(triu_index(N, r, c))
        } else {
            Some(triu_index(N, c, r))
        }
    }
}

impl<const N: usize, const S: usize, T: FloatT> Index<(usize, usize)> for DenseMatrixSymN<N, S, T> {
    type Output = T;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        let (r, c) = idx;
        let k = if r <= c { triu_index(N, r, c) } else { triu_index(N, c, r) };
        &self.data[k]
    }
}

impl<const N: usize, const S: usize, T: FloatT> IndexMut<(usize, usize)>
    for DenseMatrixSymN<N, S, T>
{
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let (r, c) = idx;
        let k = if r <= c { triu_index(N, r, c) } else { triu_index(N, c, r) };
        &mut self.data[k]
    }
}

// convert from a full N x N matrix by reading its upper triangle

impl<const N: usize, const S: usize, T: FloatT> From<&DenseMatrixMN<N, N, T>>
    for DenseMatrixSymN<N, S, T>
{
    fn from(B: &DenseMatrixMN<N, N, T>) -> Self {
        let mut A = Self::zeros();
        for r in 0..N {
            for c in r..N {
                A[(r, c)] = B.data[r][c];
            }
        }
        A
    }
}

#[test]
fn test_sym_matrix_index() {
    let mut H = DenseMatrixSym3::zeros();

    // assume upper triangle, check lower
    H[(0, 0)] = 1.;
    H[(0, 1)] = 2.;
    H[(0, 2)] = 3.;
    H[(1, 1)] = 4.;
    H[(1, 2)] = 5.;
    H[(2, 2)] = 6.;

    assert_eq!(H[(1, 0)], 2.);
    assert_eq!(H[(2, 0)], 3.);
    assert_eq!(H[(2, 1)], 5.);

    // data should be packed row by row
    assert_eq!(H.data, [1., 2., 3., 4., 5., 6.]);
    assert_eq!(H.get((2, 1)), H.get((1, 2)));
}

#[test]
fn test_sym_to_dense_and_back() {
    let A = DenseMatrixSym4::new([1., 2., 3., 4., 5., 6., 7., 8., 9., 10.]);

    let D = A.to_dense();
    #[rustfmt::skip]
    assert_eq!(D.data, [
        [1., 2., 3.,  4.],
        [2., 5., 6.,  7.],
        [3., 6., 8.,  9.],
        [4., 7., 9., 10.],
    ]);

    let B = DenseMatrixSym4::from(&D);
    assert_eq!(A, B);
    assert_eq!(A.size(), (4, 4));
}

#[cfg(feature = "serde")]
#[test]
fn test_sym_serde() {
    let A = DenseMatrixSym5::new([
        1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14., 15.,
    ]);
    let json = serde_json::to_string(&A).unwrap();
    assert_eq!(json, r#"{"data":[1.0,2.0,3.0,4.0,5.0,6.0,7.0,8.0,9.0,10.0,11.0,12.0,13.0,14.0,15.0]}"#);
    let B: DenseMatrixSym5 = serde_json::from_str(&json).unwrap();
    assert_eq!(A, B);

    // wrong length is rejected
    assert!(serde_json::from_str::<DenseMatrixSym2>(r#"{"data":[1.0,2.0]}"#).is_err());
}
