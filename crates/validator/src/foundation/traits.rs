//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A reusable validation rule.
///
/// Generic over the input type so a rule can be applied to borrowed data
/// (`str`) without the caller converting first.
///
/// # Examples
///
/// ```rust
/// use kennel_validator::foundation::{Field, Validate, ValidationError};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::invalid_format(Field::Name, input))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonEmpty.validate("Rex").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns the name of this rule.
    ///
    /// Used for debugging and log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// VALIDATABLE TRAIT
// ============================================================================

/// Trait for types that can validate themselves.
///
/// Leaf values pick the rule they are checked against; composites check
/// their fields in declaration order and stop at the first failure.
///
/// # Examples
///
/// ```rust
/// use kennel_validator::foundation::Validatable;
/// use kennel_validator::model::PersonName;
///
/// assert!(PersonName::new("Rex").validate().is_ok());
/// assert!(PersonName::new("R3x").validate().is_err());
/// ```
pub trait Validatable {
    /// Validates the instance.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Validatable::validate) succeeds.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

impl<T: Validatable> Validatable for Option<T> {
    /// `None` is valid; `Some` delegates.
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}
