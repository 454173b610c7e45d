#![allow(non_snake_case)]

use crate::algebra::*;

// hand implemented 3x3 symmetric kernels to make sure
// everything is properly unrolled.  Packed layout is
//
//   [h00 h01 h02 h11 h12 h22]
//
// for the symmetric matrix
//
//   [h00 h01 h02]
//   [h01 h11 h12]
//   [h02 h12 h22]

impl<T> DenseMatrixSym3<T>
where
    T: FloatT,
{
    /// Returns the bilinear form `a' H b`.  With `a == b` this is the
    /// quadratic form of `H`.
    pub fn conj(&self, a: &[T; 3], b: &[T; 3]) -> T {
        let [h00, h01, h02, h11, h12, h22] = self.data;

        a[0] * (h00 * b[0] + h01 * b[1] + h02 * b[2])
            + a[1] * (h01 * b[0] + h11 * b[1] + h12 * b[2])
            + a[2] * (h02 * b[0] + h12 * b[1] + h22 * b[2])
    }

    /// Three way product `out = A B A'` with `A = self`.
    ///
    /// The result is symmetric whenever `B` is, so only its packed upper
    /// triangle is formed.
    pub fn sandwich_vout(&self, B: &Self, out: &mut Self) {
        let [a00, a01, a02, a11, a12, a22] = self.data;
        let [b00, b01, b02, b11, b12, b22] = B.data;

        // rows of P = A*B.  The last row only feeds out[2,2]
        let p00 = a00 * b00 + a01 * b01 + a02 * b02;
        let p01 = a00 * b01 + a01 * b11 + a02 * b12;
        let p02 = a00 * b02 + a01 * b12 + a02 * b22;

        let p10 = a01 * b00 + a11 * b01 + a12 * b02;
        let p11 = a01 * b01 + a11 * b11 + a12 * b12;
        let p12 = a01 * b02 + a11 * b12 + a12 * b22;

        let p20 = a02 * b00 + a12 * b01 + a22 * b02;
        let p21 = a02 * b01 + a12 * b11 + a22 * b12;
        let p22 = a02 * b02 + a12 * b12 + a22 * b22;

        // P*A'
        out.data = [
            p00 * a00 + p01 * a01 + p02 * a02,
            p00 * a01 + p01 * a11 + p02 * a12,
            p00 * a02 + p01 * a12 + p02 * a22,
            p10 * a01 + p11 * a11 + p12 * a12,
            p10 * a02 + p11 * a12 + p12 * a22,
            p20 * a02 + p21 * a12 + p22 * a22,
        ];
    }

    /// Full product `out = A B` of two packed symmetric matrices.  The
    /// product is generally not symmetric, so it is written densely.
    pub fn mul_sym_vout(&self, B: &Self, out: &mut DenseMatrix3<T>) {
        self.mul_sym_vout_scaled(B, out, T::one());
    }

    /// Full product `out = s (A B)` of two packed symmetric matrices.
    pub fn mul_sym_vout_scaled(&self, B: &Self, out: &mut DenseMatrix3<T>, s: T) {
        let [a00, a01, a02, a11, a12, a22] = self.data;
        let [b00, b01, b02, b11, b12, b22] = B.data;

        out.data = [
            [
                s * (a00 * b00 + a01 * b01 + a02 * b02),
                s * (a00 * b01 + a01 * b11 + a02 * b12),
                s * (a00 * b02 + a01 * b12 + a02 * b22),
            ],
            [
                s * (a01 * b00 + a11 * b01 + a12 * b02),
                s * (a01 * b01 + a11 * b11 + a12 * b12),
                s * (a01 * b02 + a11 * b12 + a12 * b22),
            ],
            [
                s * (a02 * b00 + a12 * b01 + a22 * b02),
                s * (a02 * b01 + a12 * b11 + a22 * b12),
                s * (a02 * b02 + a12 * b12 + a22 * b22),
            ],
        ];
    }
}
