#![allow(non_snake_case)]

use crate::algebra::scalarmath::{tril_index, triangular_number, triu_index};
use crate::algebra::*;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_big_array::BigArray;

// statically sized triangular matrix types
//
// Same packed layout as the symmetric type, but the triangle
// that is not stored is implied zero rather than mirrored.
// Upper matrices store the upper triangle row by row:
//   [u00 u01 .. u0n u11 .. u1n .. unn]
// Lower matrices store the lower triangle row by row:
//   [l00 l10 l11 l20 l21 l22 .. lnn]
//
// The two are distinct types so that kernels written for one
// packing can't be handed the other.

macro_rules! impl_packed_triangular {
    ($name:ident, $doc:literal, $stored:expr, $index:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
        pub struct $name<const N: usize, const S: usize, T = f64> {
            #[cfg_attr(feature = "serde", serde(with = "BigArray"))]
            pub data: [T; S],
        }

        impl<const N: usize, const S: usize, T> $name<N, S, T> {
            pub(crate) const PACKED: () = assert!(
                triangular_number(N) == S,
                "packed triangular storage must hold N(N+1)/2 values"
            );

            pub const fn new(data: [T; S]) -> Self {
                let () = Self::PACKED;
                Self { data }
            }

            pub const fn dim(&self) -> usize {
                N
            }

            // true if (r,c) lies in the stored triangle
            #[inline]
            const fn is_stored(r: usize, c: usize) -> bool {
                $stored(r, c)
            }
        }

        impl<const N: usize, const S: usize, T: FloatT> $name<N, S, T> {
            pub fn zeros() -> Self {
                Self::new([T::zero(); S])
            }

            pub fn identity() -> Self {
                let mut A = Self::zeros();
                for i in 0..N {
                    A.set((i, i), T::one());
                }
                A
            }

            /// Assign entry `(row, col)`.
            ///
            /// # Panics
            /// Panics if `(row, col)` lies in the implied zero triangle.
            pub fn set(&mut self, idx: (usize, usize), v: T) {
                match self.index_linear(idx) {
                    Some(k) => self.data[k] = v,
                    None => panic!("entry {:?} is outside the stored triangle", idx),
                }
            }
        }

        impl<const N: usize, const S: usize, T: FloatT> Default for $name<N, S, T> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<const N: usize, const S: usize, T> From<[T; S]> for $name<N, S, T> {
            fn from(data: [T; S]) -> Self {
                Self::new(data)
            }
        }

        impl<const N: usize, const S: usize, T> ShapedMatrix for $name<N, S, T> {
            fn nrows(&self) -> usize {
                N
            }
            fn ncols(&self) -> usize {
                N
            }
        }

        impl<const N: usize, const S: usize, T: FloatT> PackedMatrix<T, N> for $name<N, S, T> {
            #[inline]
            fn data(&self) -> &[T] {
                &self.data
            }
            #[inline]
            fn data_mut(&mut self) -> &mut [T] {
                &mut self.data
            }
            #[inline]
            fn index_linear(&self, idx: (usize, usize)) -> Option<usize> {
                let (r, c) = idx;
                if Self::is_stored(r, c) {
                    Some($index(N, r, c))
                } else {
                    None
                }
            }
        }

        // convert from a full N x N matrix by reading the stored triangle

        impl<const N: usize, const S: usize, T: FloatT> From<&DenseMatrixMN<N, N, T>>
            for $name<N, S, T>
        {
            fn from(B: &DenseMatrixMN<N, N, T>) -> Self {
                let mut A = Self::zeros();
                for r in 0..N {
                    for c in 0..N {
                        if Self::is_stored(r, c) {
                            A.set((r, c), B.data[r][c]);
                        }
                    }
                }
                A
            }
        }
    };
}

const fn triu_stored(r: usize, c: usize) -> bool {
    r <= c
}
const fn tril_stored(r: usize, c: usize) -> bool {
    r >= c
}
const fn tril_index_n(_n: usize, r: usize, c: usize) -> usize {
    tril_index(r, c)
}

impl_packed_triangular!(
    DenseMatrixTriuN,
    "Packed upper triangular `N x N` matrix, row-major upper triangle.",
    triu_stored,
    triu_index
);

impl_packed_triangular!(
    DenseMatrixTrilN,
    "Packed lower triangular `N x N` matrix, row-major lower triangle.",
    tril_stored,
    tril_index_n
);

pub type DenseMatrixTriu2<T = f64> = DenseMatrixTriuN<2, 3, T>;
pub type DenseMatrixTriu3<T = f64> = DenseMatrixTriuN<3, 6, T>;
pub type DenseMatrixTriu4<T = f64> = DenseMatrixTriuN<4, 10, T>;
pub type DenseMatrixTriu5<T = f64> = DenseMatrixTriuN<5, 15, T>;

pub type DenseMatrixTril2<T = f64> = DenseMatrixTrilN<2, 3, T>;
pub type DenseMatrixTril3<T = f64> = DenseMatrixTrilN<3, 6, T>;
pub type DenseMatrixTril4<T = f64> = DenseMatrixTrilN<4, 10, T>;
pub type DenseMatrixTril5<T = f64> = DenseMatrixTrilN<5, 15, T>;

#[test]
fn test_triangular_packing() {
    let U = DenseMatrixTriu3::new([1., 2., 3., 4., 5., 6.]);
    #[rustfmt::skip]
    assert_eq!(U.to_dense().data, [
        [1., 2., 3.],
        [0., 4., 5.],
        [0., 0., 6.],
    ]);
    assert_eq!(U.index_linear((1, 0)), None);

    let L = DenseMatrixTril3::new([1., 2., 3., 4., 5., 6.]);
    #[rustfmt::skip]
    assert_eq!(L.to_dense().data, [
        [1., 0., 0.],
        [2., 3., 0.],
        [4., 5., 6.],
    ]);
    assert_eq!(L.get((0, 2)), 0.);

    // the lower packing of L' matches the upper packing of L
    let Lt = DenseMatrixTriu3::from(&L.to_dense().transpose());
    assert_eq!(Lt.data, [1., 2., 4., 3., 5., 6.]);
}

#[test]
#[should_panic]
fn test_triangular_set_outside() {
    let mut U = DenseMatrixTriu2::<f64>::zeros();
    U.set((1, 0), 1.);
}
