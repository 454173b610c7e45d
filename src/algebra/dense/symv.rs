#![allow(non_snake_case)]

use crate::algebra::vecmath::accumulate;
use crate::algebra::{DenseMatrixSymN, FloatT};

impl<const N: usize, const S: usize, T: FloatT> DenseMatrixSymN<N, S, T> {
    // y = s * (H a)
    //
    // Walks the packed upper triangle once.  Each stored off-diagonal
    // value h_ij lands in both y[i] (times a[j]) and y[j] (times a[i]).
    #[inline]
    fn symv(&self, a: &[T; N], s: T) -> [T; N] {
        let () = Self::PACKED;
        let H = &self.data;
        let mut y = [T::zero(); N];
        let mut k = 0;
        for i in 0..N {
            y[i] += H[k] * a[i];
            k += 1;
            for j in (i + 1)..N {
                y[i] += H[k] * a[j];
                y[j] += H[k] * a[i];
                k += 1;
            }
        }
        if s != T::one() {
            y.iter_mut().for_each(|y| *y *= s);
        }
        y
    }

    /// `out = H a`
    pub fn mul_vec_vout(&self, a: &[T; N], out: &mut [T; N]) {
        *out = self.symv(a, T::one());
    }

    /// `out = s (H a)`
    pub fn mul_vec_vout_scaled(&self, a: &[T; N], out: &mut [T; N], s: T) {
        *out = self.symv(a, s);
    }

    /// `a = H a`
    pub fn mul_vec(&self, a: &mut [T; N]) {
        *a = self.symv(a, T::one());
    }

    /// `a = s (H a)`
    pub fn mul_vec_scaled(&self, a: &mut [T; N], s: T) {
        *a = self.symv(a, s);
    }

    /// `out += H a`
    pub fn mul_vec_vaccum(&self, a: &[T; N], out: &mut [T; N]) {
        accumulate(out, &self.symv(a, T::one()));
    }

    /// `out += s (H a)`
    pub fn mul_vec_vaccum_scaled(&self, a: &[T; N], out: &mut [T; N], s: T) {
        accumulate(out, &self.symv(a, s));
    }
}
