//! Core traits for the validation system

use crate::foundation::{AsCandidate, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait implemented by every rule and by
/// [`StringValidator`](crate::StringValidator).
///
/// `validate` is the typed path: the input is already known to be a string,
/// so only rule logic runs. [`validate_candidate`](Validate::validate_candidate)
/// is the untyped path and gates the input first.
///
/// # Examples
///
/// ```
/// use textguard_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Value must not contain spaces."))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate_candidate(&42).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first violated constraint
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Classifies an unknown value, then validates it.
    ///
    /// Values that are not strings fail with a `type_mismatch` error without
    /// reaching [`validate`](Validate::validate).
    fn validate_candidate<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Validate<Input = str> + Sized,
        S: AsCandidate + ?Sized,
    {
        let input = value.as_candidate().into_str()?;
        self.validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
