#![allow(non_snake_case)]

use crate::algebra::*;

// Each dimension / shape pair gets its own closed-form implementation,
// so there is deliberately no generic implementation of `cofactors`.
mod lower;
mod symmetric;
mod upper;

/// Closed-form determinant and adjugate of a small packed matrix.
///
/// Implemented for
/// * symmetric matrices of dimension 2 to 5,
/// * upper triangular matrices of dimension 2 to 5,
/// * lower triangular matrices of dimension 2 to 5.
///
/// The adjugate `C` has the same packed shape as the input `A` and satisfies
/// `A C = det(A) I`, so the inverse is `C / det(A)`.  The division is left
/// to the caller: a caller that needs only the determinant, or that wants to
/// fold `1/det` into a later scaling, never pays for it.
///
/// Near-singular inputs are not detected.  The kernel returns the (tiny)
/// determinant and a finite adjugate, and it is up to the caller to decide
/// whether dividing is meaningful.  See [`try_inverse`](Cofactors::try_inverse)
/// for a checked alternative.
pub trait Cofactors<T: FloatT, const N: usize>: PackedMatrix<T, N> + Copy {
    /// Writes the adjugate of `self` into `out` and returns the determinant.
    fn cofactors(&self, out: &mut Self) -> T;

    /// Determinant of `self`.
    fn determinant(&self) -> T {
        let mut C = *self;
        self.cofactors(&mut C)
    }

    /// Inverse as `adj / det`, with no singularity check.  A zero
    /// determinant produces infinities or NaNs.
    fn inverse_unchecked(&self) -> Self {
        let mut C = *self;
        let det = self.cofactors(&mut C);
        let r = T::recip(det);
        C.data_mut().iter_mut().for_each(|c| *c *= r);
        C
    }

    /// Inverse as `adj / det`, rejecting singular or non-finite
    /// determinants according to `settings`.
    fn try_inverse(&self, settings: &InversionSettings<T>) -> Result<Self, InversionError> {
        let mut C = *self;
        let det = self.cofactors(&mut C);

        check_determinant::<T, N, Self>(self, det, settings)?;

        let r = T::recip(det);
        C.data_mut().iter_mut().for_each(|c| *c *= r);
        log::trace!("inverted {}x{} matrix, det = {:e}", N, N, det);
        Ok(C)
    }
}

fn check_determinant<T, const N: usize, M>(
    A: &M,
    det: T,
    settings: &InversionSettings<T>,
) -> Result<(), InversionError>
where
    T: FloatT,
    M: PackedMatrix<T, N>,
{
    if !det.is_finite() {
        if settings.check_finite {
            log::debug!("rejecting {}x{} inverse: determinant is {}", N, N, det);
            return Err(InversionError::NonFinite);
        }
        return Ok(());
    }

    let mut tol = settings.singular_tol;
    if settings.relative {
        tol *= A.diag_abs_prod();
    }

    if det.abs() <= tol {
        log::debug!(
            "rejecting {}x{} inverse: |det| = {:e} <= tolerance {:e}",
            N,
            N,
            det.abs(),
            tol
        );
        return Err(InversionError::Singular {
            det: det.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
