#![allow(non_snake_case)]

use crate::algebra::vecmath::accumulate;
use crate::algebra::{DenseMatrixMN, FloatT};

// Vector-matrix products for the general fixed-size matrix type.
//
// For M of size R x C:
//   mul_vec_*   : a (length R) times M          -> length C,
//                 y[j] = Σ_i a[i] M[i][j]
//   mul_vec_t_* : a (length C) times M'         -> length R,
//                 y[j] = Σ_i a[i] M[j][i]
//
// Each comes in vout / in place / vaccum flavors with an optional
// scale on the product.  The in place flavors overwrite the leading
// entries of `a`, so the result must not be longer than `a`.

struct FitsInPlace<const LEN: usize, const OUT: usize>;

impl<const LEN: usize, const OUT: usize> FitsInPlace<LEN, OUT> {
    const OK: () = assert!(
        OUT <= LEN,
        "in place product must not be longer than its input vector"
    );
}

impl<const R: usize, const C: usize, T: FloatT> DenseMatrixMN<R, C, T> {
    // y = s * (a' M)
    #[inline]
    fn vecmat(&self, a: &[T; R], s: T) -> [T; C] {
        let mut y = [T::zero(); C];
        for (&ai, row) in a.iter().zip(self.data.iter()) {
            let sai = s * ai;
            for (yj, &mij) in y.iter_mut().zip(row.iter()) {
                *yj += sai * mij;
            }
        }
        y
    }

    // y = s * (M a)
    #[inline]
    fn matvec(&self, a: &[T; C], s: T) -> [T; R] {
        let mut y = [T::zero(); R];
        for (yj, row) in y.iter_mut().zip(self.data.iter()) {
            let dot = row
                .iter()
                .zip(a.iter())
                .fold(T::zero(), |acc, (&mji, &ai)| acc + mji * ai);
            *yj = s * dot;
        }
        y
    }

    /// `out = a' M`
    pub fn mul_vec_vout(&self, a: &[T; R], out: &mut [T; C]) {
        *out = self.vecmat(a, T::one());
    }

    /// `out = s (a' M)`
    pub fn mul_vec_vout_scaled(&self, a: &[T; R], out: &mut [T; C], s: T) {
        *out = self.vecmat(a, s);
    }

    /// `a[..C] = a' M`.  Entries of `a` past `C` are left untouched.
    pub fn mul_vec(&self, a: &mut [T; R]) {
        self.mul_vec_scaled(a, T::one());
    }

    /// `a[..C] = s (a' M)`.  Entries of `a` past `C` are left untouched.
    pub fn mul_vec_scaled(&self, a: &mut [T; R], s: T) {
        let () = FitsInPlace::<R, C>::OK;
        let y = self.vecmat(a, s);
        a[..C].copy_from_slice(&y);
    }

    /// `out += a' M`
    pub fn mul_vec_vaccum(&self, a: &[T; R], out: &mut [T; C]) {
        accumulate(out, &self.vecmat(a, T::one()));
    }

    /// `out += s (a' M)`
    pub fn mul_vec_vaccum_scaled(&self, a: &[T; R], out: &mut [T; C], s: T) {
        accumulate(out, &self.vecmat(a, s));
    }

    /// `out = a' M'`, i.e. `out = M a`
    pub fn mul_vec_t_vout(&self, a: &[T; C], out: &mut [T; R]) {
        *out = self.matvec(a, T::one());
    }

    /// `out = s (a' M')`
    pub fn mul_vec_t_vout_scaled(&self, a: &[T; C], out: &mut [T; R], s: T) {
        *out = self.matvec(a, s);
    }

    /// `a[..R] = a' M'`.  Entries of `a` past `R` are left untouched.
    pub fn mul_vec_t(&self, a: &mut [T; C]) {
        self.mul_vec_t_scaled(a, T::one());
    }

    /// `a[..R] = s (a' M')`.  Entries of `a` past `R` are left untouched.
    pub fn mul_vec_t_scaled(&self, a: &mut [T; C], s: T) {
        let () = FitsInPlace::<C, R>::OK;
        let y = self.matvec(a, s);
        a[..R].copy_from_slice(&y);
    }

    /// `out += a' M'`
    pub fn mul_vec_t_vaccum(&self, a: &[T; C], out: &mut [T; R]) {
        accumulate(out, &self.matvec(a, T::one()));
    }

    /// `out += s (a' M')`
    pub fn mul_vec_t_vaccum_scaled(&self, a: &[T; C], out: &mut [T; R], s: T) {
        accumulate(out, &self.matvec(a, s));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[rustfmt::skip]
    fn test_matrix_2x3() -> DenseMatrixMN<2, 3, f64> {
        DenseMatrixMN::from([
            [1., 2., 3.],
            [4., 5., 6.],
        ])
    }

    #[test]
    fn test_gemv_flavors() {
        let M = test_matrix_2x3();
        let a = [1., -1.];
        let mut y = [0.; 3];

        M.mul_vec_vout(&a, &mut y);
        assert_eq!(y, [-3., -3., -3.]);

        M.mul_vec_vout_scaled(&a, &mut y, -2.);
        assert_eq!(y, [6., 6., 6.]);

        let mut y = [1., 2., 3.];
        M.mul_vec_vaccum(&a, &mut y);
        assert_eq!(y, [-2., -1., 0.]);

        let mut y = [1., 2., 3.];
        M.mul_vec_vaccum_scaled(&a, &mut y, 2.);
        assert_eq!(y, [-5., -4., -3.]);
    }

    #[test]
    fn test_gemv_t_flavors() {
        let M = test_matrix_2x3();
        let a = [1., 0., -1.];
        let mut y = [0.; 2];

        M.mul_vec_t_vout(&a, &mut y);
        assert_eq!(y, [-2., -2.]);

        M.mul_vec_t_vout_scaled(&a, &mut y, 0.5);
        assert_eq!(y, [-1., -1.]);

        // in place overwrites the leading two entries only
        let mut a2 = a;
        M.mul_vec_t(&mut a2);
        assert_eq!(a2, [-2., -2., -1.]);

        let mut a2 = a;
        M.mul_vec_t_scaled(&mut a2, 3.);
        assert_eq!(a2, [-6., -6., -1.]);

        let mut y = [10., 20.];
        M.mul_vec_t_vaccum(&a, &mut y);
        assert_eq!(y, [8., 18.]);

        let mut y = [10., 20.];
        M.mul_vec_t_vaccum_scaled(&a, &mut y, -1.);
        assert_eq!(y, [12., 22.]);
    }

    #[test]
    fn test_gemv_in_place() {
        // 3x2 so that the product is shorter than the input
        let M = test_matrix_2x3().transpose();
        let mut a = [1., 0., -1.];
        M.mul_vec(&mut a);
        assert_eq!(a, [-2., -2., -1.]);

        let mut a = [1., 0., -1.];
        M.mul_vec_scaled(&mut a, -1.);
        assert_eq!(a, [2., 2., -1.]);
    }
}
