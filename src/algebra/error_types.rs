use thiserror::Error;

/// Error type returned by the checked inversion routines.
///
/// The cofactor kernels themselves never fail.  These errors are only
/// produced by [`Cofactors::try_inverse`](crate::algebra::Cofactors::try_inverse),
/// which inspects the determinant before dividing by it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InversionError {
    /// Determinant magnitude is at or below the singularity threshold
    #[error("Matrix is numerically singular (determinant {det:e})")]
    Singular {
        /// the determinant returned by the cofactor kernel
        det: f64,
    },
    /// Determinant is NaN or infinite
    #[error("Matrix determinant is not finite")]
    NonFinite,
}

/// Error type returned when building invalid [`InversionSettings`](crate::algebra::InversionSettings).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
