//! Fixed-length vector kernels.
//!
//! All kernels take `[T; N]` arrays, so lengths are checked by the type
//! system and `N = 0` is simply a no-op.  The add/subtract families come in
//! three destination conventions, each with an optional scale applied to
//! the second operand:
//!
//! * `*_vout`: `out = a ± s*b`, written to a separate output.
//! * in place: `a = a ± s*b`.
//! * `*_vaccum`: `out += a ± s*b`.  Callers typically seed `out` with a
//!   copy of `a`, which yields `out = 2a ± s*b`.

use super::FloatT;
use itertools::izip;
use std::iter::zip;

/// Euclidean norm `sqrt(Σ vᵢ²)`
#[inline]
pub fn norm2<T: FloatT, const N: usize>(v: &[T; N]) -> T {
    T::sqrt(norm2_sq(v))
}

/// Squared Euclidean norm `Σ vᵢ²`
#[inline]
pub fn norm2_sq<T: FloatT, const N: usize>(v: &[T; N]) -> T {
    dot(v, v)
}

/// Inner product `Σ vᵢwᵢ`
#[inline]
pub fn dot<T: FloatT, const N: usize>(v: &[T; N], w: &[T; N]) -> T {
    zip(v, w).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

// Generates the {vout, in place, vaccum} x {unscaled, scaled} family
// for one of the two combining operators.
macro_rules! impl_vec_combine {
    (
        $op:tt,
        $vout:ident, $vout_scaled:ident,
        $inplace:ident, $inplace_scaled:ident,
        $vaccum:ident, $vaccum_scaled:ident
    ) => {
        #[doc = concat!("`out[i] = a[i] ", stringify!($op), " b[i]`")]
        #[inline]
        pub fn $vout<T: FloatT, const N: usize>(a: &[T; N], b: &[T; N], out: &mut [T; N]) {
            for (o, &a, &b) in izip!(out.iter_mut(), a, b) {
                *o = a $op b;
            }
        }

        #[doc = concat!("`out[i] = a[i] ", stringify!($op), " s*b[i]`")]
        #[inline]
        pub fn $vout_scaled<T: FloatT, const N: usize>(
            a: &[T; N],
            b: &[T; N],
            out: &mut [T; N],
            s: T,
        ) {
            for (o, &a, &b) in izip!(out.iter_mut(), a, b) {
                *o = a $op s * b;
            }
        }

        #[doc = concat!("`a[i] = a[i] ", stringify!($op), " b[i]`")]
        #[inline]
        pub fn $inplace<T: FloatT, const N: usize>(a: &mut [T; N], b: &[T; N]) {
            for (a, &b) in zip(a.iter_mut(), b) {
                *a = *a $op b;
            }
        }

        #[doc = concat!("`a[i] = a[i] ", stringify!($op), " s*b[i]`")]
        #[inline]
        pub fn $inplace_scaled<T: FloatT, const N: usize>(a: &mut [T; N], b: &[T; N], s: T) {
            for (a, &b) in zip(a.iter_mut(), b) {
                *a = *a $op s * b;
            }
        }

        #[doc = concat!("`out[i] += a[i] ", stringify!($op), " b[i]`")]
        #[inline]
        pub fn $vaccum<T: FloatT, const N: usize>(a: &[T; N], b: &[T; N], out: &mut [T; N]) {
            for (o, &a, &b) in izip!(out.iter_mut(), a, b) {
                *o += a $op b;
            }
        }

        #[doc = concat!("`out[i] += a[i] ", stringify!($op), " s*b[i]`")]
        #[inline]
        pub fn $vaccum_scaled<T: FloatT, const N: usize>(
            a: &[T; N],
            b: &[T; N],
            out: &mut [T; N],
            s: T,
        ) {
            for (o, &a, &b) in izip!(out.iter_mut(), a, b) {
                *o += a $op s * b;
            }
        }
    };
}

impl_vec_combine!(
    +,
    add_vec_vout, add_vec_vout_scaled,
    add_vec, add_vec_scaled,
    add_vec_vaccum, add_vec_vaccum_scaled
);

impl_vec_combine!(
    -,
    sub_vec_vout, sub_vec_vout_scaled,
    sub_vec, sub_vec_scaled,
    sub_vec_vaccum, sub_vec_vaccum_scaled
);

// elementwise out += v, shared by the matrix-vector accumulate flavors
#[inline]
pub(crate) fn accumulate<T: FloatT, const N: usize>(out: &mut [T; N], v: &[T; N]) {
    for (o, &v) in zip(out.iter_mut(), v) {
        *o += v;
    }
}

/// Largest absolute elementwise difference `max |a[i] - b[i]|`
pub fn norm_inf_diff<T: FloatT, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    zip(a, b).fold(T::zero(), |m, (&x, &y)| T::max(m, (x - y).abs()))
}
