//! __minimath__ is a collection of fixed-size linear algebra kernels for
//! matrices and vectors of dimension five or less.
//!
//! It is meant for tight numeric loops (covariance propagation, small
//! least-squares solves and the like) where a general purpose matrix
//! library pays for dynamic shapes, heap allocation and loop overhead that
//! dominate at these sizes.  All dimensions are const generic parameters,
//! nothing allocates, and the inversion kernels are written out in closed
//! form for each dimension and shape.
//!
//! ## Features
//!
//! * __Vector kernels__: norms, inner products and scaled add/subtract over
//!   `[T; N]`.
//!
//! * __Matrix-vector products__: row-vector times a general `R x C` matrix
//!   or its transpose, and packed symmetric matrix times vector.  Every
//!   product comes with a separate output (`*_vout`), an in place variant,
//!   and an accumulating variant (`*_vaccum`), each optionally scaled.
//!
//! * __Packed storage__: symmetric, upper triangular and lower triangular
//!   matrices store only `N(N+1)/2` values, row by row.
//!
//! * __Cofactor inversion__: determinant and adjugate of packed symmetric
//!   and triangular matrices up to 5x5, with a checked inverse that rejects
//!   singular input according to configurable
//!   [settings](crate::algebra::InversionSettings).
//!
//! * __3x3 symmetric kernels__: the sandwich product `A B A'` and the
//!   bilinear form `a' S b`.
//!
//! ## Example
//!
//! ```
//! use minimath::algebra::*;
//!
//! // [4 2]
//! // [2 3]
//! let A = DenseMatrixSym2::new([4., 2., 3.]);
//!
//! let Ainv = A.try_inverse(&InversionSettings::default()).unwrap();
//! assert_eq!(Ainv.data, [0.375, -0.25, 0.5]);
//!
//! let mut x = [1., 1.];
//! Ainv.mul_vec(&mut x);
//! assert_eq!(x, [0.125, 0.25]);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

#![allow(non_snake_case)]

pub mod algebra;
