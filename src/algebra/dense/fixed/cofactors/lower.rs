#![allow(non_snake_case)]

use crate::algebra::*;

// Closed-form adjugates of packed lower triangular matrices.
//
// The adjugate of a lower triangular L is lower triangular, with
//
//   c_ij = (-1)^(i+j) det(L[j+1..i, j..i-1]) * prod_{k<j or k>i} l_kk
//
// for i >= j.  Output is packed row by row like the input:
//   [c00 c10 c11 c20 c21 c22 ...]

impl<T: FloatT> Cofactors<T, 2> for DenseMatrixTril2<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        let [l00, l10, l11] = self.data;

        out.data = [l11, -l10, l00];

        l00 * l11
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

impl<T: FloatT> Cofactors<T, 3> for DenseMatrixTril3<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        #[rustfmt::skip]
        let [
            l00,
            l10, l11,
            l20, l21, l22,
        ] = self.data;

        #[rustfmt::skip]
        let cof = [
            l11 * l22,
            -l10 * l22,             l00 * l22,
            l10 * l21 - l20 * l11,  -l00 * l21,  l00 * l11,
        ];
        out.data = cof;

        l00 * l11 * l22
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

impl<T: FloatT> Cofactors<T, 4> for DenseMatrixTril4<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        #[rustfmt::skip]
        let [
            l00,
            l10, l11,
            l20, l21, l22,
            l30, l31, l32, l33,
        ] = self.data;

        let k10_21 = l10 * l21 - l20 * l11;
        let k21_32 = l21 * l32 - l31 * l22;
        let k10_32 = l10 * k21_32 - l11 * (l20 * l32 - l30 * l22);

        out.data = [
            l11 * l22 * l33,
            -l10 * l22 * l33,
            l00 * l22 * l33,
            k10_21 * l33,
            -l00 * l21 * l33,
            l00 * l11 * l33,
            -k10_32,
            l00 * k21_32,
            -l00 * l11 * l32,
            l00 * l11 * l22,
        ];

        l00 * l11 * l22 * l33
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

impl<T: FloatT> Cofactors<T, 5> for DenseMatrixTril5<T> {
    fn cofactors(&self, out: &mut Self) -> T {
        #[rustfmt::skip]
        let [
            l00,
            l10, l11,
            l20, l21, l22,
            l30, l31, l32, l33,
            l40, l41, l42, l43, l44,
        ] = self.data;

        // chained minors below the diagonal
        let k10_21 = l10 * l21 - l20 * l11;
        let k21_32 = l21 * l32 - l31 * l22;
        let k32_43 = l32 * l43 - l42 * l33;
        let k10_32 = l10 * k21_32 - l11 * (l20 * l32 - l30 * l22);
        let k21_43 = l21 * k32_43 - l22 * (l31 * l43 - l41 * l33);
        let k10_43 = l10 * k21_43 - l11 * (l20 * k32_43 - l22 * (l30 * l43 - l40 * l33));

        out.data = [
            l11 * l22 * l33 * l44,
            -l10 * l22 * l33 * l44,
            l00 * l22 * l33 * l44,
            k10_21 * l33 * l44,
            -l00 * l21 * l33 * l44,
            l00 * l11 * l33 * l44,
            -k10_32 * l44,
            l00 * k21_32 * l44,
            -l00 * l11 * l32 * l44,
            l00 * l11 * l22 * l44,
            k10_43,
            -l00 * k21_43,
            l00 * l11 * k32_43,
            -l00 * l11 * l22 * l43,
            l00 * l11 * l22 * l33,
        ];

        l00 * l11 * l22 * l33 * l44
    }

    fn determinant(&self) -> T {
        self.diag_prod()
    }
}

#[cfg(test)]
mod test {
    use crate::algebra::*;

    #[test]
    fn test_tril_cofactors_3x3() {
        // [1 0 0]
        // [2 1 0]
        // [3 4 1]
        let L = DenseMatrixTril3::new([1., 2., 1., 3., 4., 1.]);
        let mut C = DenseMatrixTril3::zeros();
        assert_eq!(L.cofactors(&mut C), 1.);
        assert_eq!(C.data, [1., -2., 1., 5., -4., 1.]);
    }

    #[test]
    fn test_tril_is_transpose_of_triu() {
        #[rustfmt::skip]
        let L = DenseMatrixTril5::new([
            1.5,
            0.2, 2.0,
           -1.0, 0.3, 0.7,
            0.4, 1.1,-0.6, 1.2,
            0.9,-0.8, 0.5, 0.3, 2.5,
        ]);
        let U = DenseMatrixTriu5::from(&L.to_dense().transpose());

        let mut CL = DenseMatrixTril5::zeros();
        let mut CU = DenseMatrixTriu5::zeros();
        let detL = L.cofactors(&mut CL);
        let detU = U.cofactors(&mut CU);

        assert_eq!(detL, detU);
        assert_eq!(detL, L.determinant());
        assert_eq!(CL.to_dense(), CU.to_dense().transpose());
    }
}
