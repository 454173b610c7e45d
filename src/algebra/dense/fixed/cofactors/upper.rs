#![allow(non_snake_case)]

use crate::algebra::*;

// Closed-form adjugates of packed upper triangular matrices.
//
// The adjugate of an upper triangular U is upper triangular, with
//
//   c_ij = (-1)^(i+j) det(U[i..j-1, i+1..j]) * prod_{k<i or k>j} u_kk
//
// for i <= j.  The minor is upper Hessenberg, so each entry is a short
// chain of products of the entries between the diagonals i and j.

impl<T: FloatT> Cofactors<T, 2> for DenseMatrixTriu2<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        let [u00, u01, u11] = self.data;

        out.data = [u11, -u01, u00];

        u00 * u11
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

impl<T: FloatT> Cofactors<T, 3> for DenseMatrixTriu3<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        let [u00, u01, u02, u11, u12, u22] = self.data;

        out.data = [
            u11 * u22,
            -u01 * u22,
            u01 * u12 - u02 * u11,
            u00 * u22,
            -u00 * u12,
            u00 * u11,
        ];

        u00 * u11 * u22
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

impl<T: FloatT> Cofactors<T, 4> for DenseMatrixTriu4<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        #[rustfmt::skip]
        let [
            u00, u01, u02, u03,
                 u11, u12, u13,
                      u22, u23,
                           u33,
        ] = self.data;

        let k01_12 = u01 * u12 - u02 * u11;
        let k12_23 = u12 * u23 - u13 * u22;

        out.data = [
            u11 * u22 * u33,
            -u01 * u22 * u33,
            k01_12 * u33,
            -(u01 * k12_23 - u11 * (u02 * u23 - u03 * u22)),
            u00 * u22 * u33,
            -u00 * u12 * u33,
            u00 * k12_23,
            u00 * u11 * u33,
            -u00 * u11 * u23,
            u00 * u11 * u22,
        ];

        u00 * u11 * u22 * u33
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

impl<T: FloatT> Cofactors<T, 5> for DenseMatrixTriu5<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        #[rustfmt::skip]
        let [
            u00, u01, u02, u03, u04,
                 u11, u12, u13, u14,
                      u22, u23, u24,
                           u33, u34,
                                u44,
        ] = self.data;

        // chained minors one step off the diagonal
        let k01_12 = u01 * u12 - u02 * u11;
        let k12_23 = u12 * u23 - u13 * u22;
        let k23_34 = u23 * u34 - u24 * u33;

        // and two steps
        let k01_23 = u01 * k12_23 - u11 * (u02 * u23 - u03 * u22);
        let k12_34 = u12 * k23_34 - u22 * (u13 * u34 - u14 * u33);

        // and three
        let k01_34 = u01 * k12_34 - u11 * (u02 * k23_34 - u22 * (u03 * u34 - u04 * u33));

        out.data = [
            u11 * u22 * u33 * u44,
            -u01 * u22 * u33 * u44,
            k01_12 * u33 * u44,
            -k01_23 * u44,
            k01_34,
            u00 * u22 * u33 * u44,
            -u00 * u12 * u33 * u44,
            u00 * k12_23 * u44,
            -u00 * k12_34,
            u00 * u11 * u33 * u44,
            -u00 * u11 * u23 * u44,
            u00 * u11 * k23_34,
            u00 * u11 * u22 * u44,
            -u00 * u11 * u22 * u34,
            u00 * u11 * u22 * u33,
        ];

        u00 * u11 * u22 * u33 * u44
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}
