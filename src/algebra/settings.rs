use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Options for the checked inversion [`Cofactors::try_inverse`](crate::algebra::Cofactors::try_inverse).
///
/// The unchecked kernels take no settings.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InversionSettings<T: FloatT> {
    ///determinant magnitudes at or below this value are singular
    #[builder(default = "(1e-12).as_T()")]
    pub singular_tol: T,

    ///scale `singular_tol` by the product of the diagonal magnitudes
    #[builder(default = "false")]
    pub relative: bool,

    ///reject NaN or infinite determinants
    #[builder(default = "true")]
    pub check_finite: bool,
}

impl<T> Default for InversionSettings<T>
where
    T: FloatT,
{
    fn default() -> InversionSettings<T> {
        InversionSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> InversionSettings<T>
where
    T: FloatT,
{
    /// Check that a settings object holds legal values.  Useful for
    /// settings that were deserialized or modified after construction.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_singular_tol(self.singular_tol)
    }
}

fn validate_singular_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_nan() || tol < T::zero() {
        return Err(SettingsError::BadFieldValue("singular_tol"));
    }
    Ok(())
}

// pre build checker (for auto-validation when building)

impl From<SettingsError> for InversionSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        InversionSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> InversionSettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the specified singular_tol is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.singular_tol {
            validate_singular_tol(tol)?;
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    let settings = InversionSettings::<f64>::default();
    assert_eq!(settings.singular_tol, 1e-12);
    assert!(!settings.relative);
    assert!(settings.check_finite);
    assert!(settings.validate().is_ok());

    let built = InversionSettingsBuilder::<f64>::default()
        .singular_tol(0.)
        .check_finite(false)
        .build();
    assert!(built.is_ok());

    for bad in [-1e-12, f64::NAN] {
        let built = InversionSettingsBuilder::<f64>::default()
            .singular_tol(bad)
            .build();
        assert!(matches!(
            built,
            Err(InversionSettingsBuilderError::ValidationError(_))
        ));
    }

    let mut settings = InversionSettings::<f64>::default();
    settings.singular_tol = -1.;
    assert!(settings.validate().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_serde() {
    let settings = InversionSettingsBuilder::<f64>::default()
        .relative(true)
        .build()
        .unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let back: InversionSettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, back);

    // missing fields fall back to defaults
    let partial: InversionSettings<f64> = serde_json::from_str(r#"{"relative":true}"#).unwrap();
    assert_eq!(partial, settings);
}
