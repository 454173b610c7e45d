//! Fixed-size dense linear algebra kernels.
//!
//! Everything here operates on statically sized arrays and matrices, so
//! dimensions are checked at compile time and nothing allocates.  The module
//! provides
//!
//! * vector kernels over `[T; N]` in [`vecmath`],
//! * a general row-major matrix type [`DenseMatrixMN`] with vector-matrix
//!   products,
//! * packed symmetric ([`DenseMatrixSymN`]), upper triangular
//!   ([`DenseMatrixTriuN`]) and lower triangular ([`DenseMatrixTrilN`])
//!   matrix types,
//! * closed-form determinants and adjugates for packed matrices up to
//!   dimension five via the [`Cofactors`] trait, and
//! * unrolled 3x3 symmetric kernels.
//!
//! All kernels are generic over [`FloatT`].

mod error_types;
mod floats;
mod matrix_traits;
mod scalarmath;
mod settings;
pub mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use settings::*;

mod dense;
pub use dense::*;
