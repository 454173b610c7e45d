#![allow(non_snake_case)]

use crate::algebra::*;

// Closed-form adjugates of packed symmetric matrices.
//
// The adjugate of a symmetric matrix is symmetric, so only its
// upper triangle is formed:  b_ij = (-1)^(i+j) det(A without row i, col j).
// Larger sizes share 2x2 (and 3x3) minors between entries rather
// than expanding every entry independently.

impl<T: FloatT> Cofactors<T, 2> for DenseMatrixSym2<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        let [s00, s01, s11] = self.data;

        out.data = [s11, -s01, s00];

        s00 * s11 - s01 * s01
    }
}

impl<T: FloatT> Cofactors<T, 3> for DenseMatrixSym3<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        let [s00, s01, s02, s11, s12, s22] = self.data;

        let b00 = s11 * s22 - s12 * s12;
        let b01 = s02 * s12 - s01 * s22;
        let b02 = s01 * s12 - s02 * s11;
        let b11 = s00 * s22 - s02 * s02;
        let b12 = s01 * s02 - s00 * s12;
        let b22 = s00 * s11 - s01 * s01;

        out.data = [b00, b01, b02, b11, b12, b22];

        s00 * b00 + s01 * b01 + s02 * b02
    }
}

impl<T: FloatT> Cofactors<T, 4> for DenseMatrixSym4<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        let [s00, s01, s02, s03, s11, s12, s13, s22, s23, s33] = self.data;

        // 2x2 minors of rows 0,1
        let t01 = s00 * s11 - s01 * s01;
        let t02 = s00 * s12 - s02 * s01;
        let t03 = s00 * s13 - s03 * s01;
        let t12 = s01 * s12 - s02 * s11;
        let t13 = s01 * s13 - s03 * s11;
        let t23 = s02 * s13 - s03 * s12;

        // 2x2 minors of rows 2,3
        let u01 = s02 * s13 - s12 * s03;
        let u02 = s02 * s23 - s22 * s03;
        let u03 = s02 * s33 - s23 * s03;
        let u12 = s12 * s23 - s22 * s13;
        let u13 = s12 * s33 - s23 * s13;
        let u23 = s22 * s33 - s23 * s23;

        out.data = [
            s11 * u23 - s12 * u13 + s13 * u12,
            -s01 * u23 + s02 * u13 - s03 * u12,
            s13 * t23 - s23 * t13 + s33 * t12,
            -s12 * t23 + s22 * t13 - s23 * t12,
            s00 * u23 - s02 * u03 + s03 * u02,
            -s03 * t23 + s23 * t03 - s33 * t02,
            s02 * t23 - s22 * t03 + s23 * t02,
            s03 * t13 - s13 * t03 + s33 * t01,
            -s02 * t13 + s12 * t03 - s23 * t01,
            s02 * t12 - s12 * t02 + s22 * t01,
        ];

        // Laplace expansion on rows 0,1 against rows 2,3
        t01 * u23 - t02 * u13 + t03 * u12 + t12 * u03 - t13 * u02 + t23 * u01
    }
}

impl<T: FloatT> Cofactors<T, 5> for DenseMatrixSym5<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        #[rustfmt::skip]
        let [
            s00, s01, s02, s03, s04,
                 s11, s12, s13, s14,
                      s22, s23, s24,
                           s33, s34,
                                s44,
        ] = self.data;

        // 2x2 minors of rows 3,4
        let d01 = s03 * s14 - s13 * s04;
        let d02 = s03 * s24 - s23 * s04;
        let d03 = s03 * s34 - s33 * s04;
        let d04 = s03 * s44 - s34 * s04;
        let d12 = s13 * s24 - s23 * s14;
        let d13 = s13 * s34 - s33 * s14;
        let d14 = s13 * s44 - s34 * s14;
        let d23 = s23 * s34 - s33 * s24;
        let d24 = s23 * s44 - s34 * s24;
        let d34 = s33 * s44 - s34 * s34;

        // 3x3 minors of rows 2,3,4
        let e012 = s02 * d12 - s12 * d02 + s22 * d01;
        let e013 = s02 * d13 - s12 * d03 + s23 * d01;
        let e014 = s02 * d14 - s12 * d04 + s24 * d01;
        let e023 = s02 * d23 - s22 * d03 + s23 * d02;
        let e024 = s02 * d24 - s22 * d04 + s24 * d02;
        let e034 = s02 * d34 - s23 * d04 + s24 * d03;
        let e123 = s12 * d23 - s22 * d13 + s23 * d12;
        let e124 = s12 * d24 - s22 * d14 + s24 * d12;
        let e134 = s12 * d34 - s23 * d14 + s24 * d13;
        let e234 = s22 * d34 - s23 * d24 + s24 * d23;

        // 2x2 minors of rows 0,1
        let f01 = s00 * s11 - s01 * s01;
        let f02 = s00 * s12 - s02 * s01;
        let f03 = s00 * s13 - s03 * s01;
        let f04 = s00 * s14 - s04 * s01;
        let f12 = s01 * s12 - s02 * s11;
        let f13 = s01 * s13 - s03 * s11;
        let f14 = s01 * s14 - s04 * s11;
        let f23 = s02 * s13 - s03 * s12;
        let f24 = s02 * s14 - s04 * s12;
        let f34 = s03 * s14 - s04 * s13;

        // 3x3 minors of rows 0,1,2
        let h012 = s02 * f12 - s12 * f02 + s22 * f01;
        let h013 = s02 * f13 - s12 * f03 + s23 * f01;
        let h023 = s02 * f23 - s22 * f03 + s23 * f02;
        let h123 = s12 * f23 - s22 * f13 + s23 * f12;
        let h014 = s02 * f14 - s12 * f04 + s24 * f01;
        let h024 = s02 * f24 - s22 * f04 + s24 * f02;
        let h124 = s12 * f24 - s22 * f14 + s24 * f12;

        // row 0 and row 1 of the adjugate, from rows 2,3,4 of A
        let b00 = s11 * e234 - s12 * e134 + s13 * e124 - s14 * e123;
        let b01 = -(s01 * e234 - s12 * e034 + s13 * e024 - s14 * e023);
        let b02 = s01 * e134 - s11 * e034 + s13 * e014 - s14 * e013;
        let b03 = -(s01 * e124 - s11 * e024 + s12 * e014 - s14 * e012);
        let b04 = s01 * e123 - s11 * e023 + s12 * e013 - s13 * e012;

        let b11 = s00 * e234 - s02 * e034 + s03 * e024 - s04 * e023;
        let b12 = -(s00 * e134 - s01 * e034 + s03 * e014 - s04 * e013);
        let b13 = s00 * e124 - s01 * e024 + s02 * e014 - s04 * e012;
        let b14 = -(s00 * e123 - s01 * e023 + s02 * e013 - s03 * e012);

        // row 2: Laplace expansion on rows 0,1 against rows 3,4
        let b22 = f01 * d34 - f03 * d14 + f04 * d13 + f13 * d04 - f14 * d03 + f34 * d01;
        let b23 = -(f01 * d24 - f02 * d14 + f04 * d12 + f12 * d04 - f14 * d02 + f24 * d01);
        let b24 = f01 * d23 - f02 * d13 + f03 * d12 + f12 * d03 - f13 * d02 + f23 * d01;

        // rows 3,4: expand along the last remaining row against rows 0,1,2
        let b33 = -s04 * h124 + s14 * h024 - s24 * h014 + s44 * h012;
        let b34 = -(-s04 * h123 + s14 * h023 - s24 * h013 + s34 * h012);
        let b44 = -s03 * h123 + s13 * h023 - s23 * h013 + s33 * h012;

        out.data = [
            b00, b01, b02, b03, b04, b11, b12, b13, b14, b22, b23, b24, b33, b34, b44,
        ];

        s00 * b00 + s01 * b01 + s02 * b02 + s03 * b03 + s04 * b04
    }
}
