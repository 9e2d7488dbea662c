//! Core validation types and traits
//!
//! - **Traits**: [`Validate`] for reusable rules, [`Validatable`] for values
//!   that know how to check themselves
//! - **Errors**: [`ValidationError`] and its discriminators
//!
//! # Architecture
//!
//! Rules are small types generic over their input:
//!
//! ```rust
//! use kennel_validator::foundation::{Field, Validate};
//! use kennel_validator::validators::positive;
//!
//! let rule = positive(Field::Age);
//! assert!(rule.validate(&3).is_ok());
//! assert!(rule.validate(&0).is_err());
//! ```
//!
//! Values own their rule choice and expose it through [`Validatable`]:
//!
//! ```rust
//! use kennel_validator::foundation::Validatable;
//! use kennel_validator::model::AgeValue;
//!
//! assert!(AgeValue::new(3).validate().is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::{
    Chain, EntityKind, ErrorKind, Field, ValidationError, find_validation_failure,
    is_validation_failure,
};
pub use traits::{Validatable, Validate};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a value with a rule.
///
/// Convenience for one-off checks where naming the trait is noise.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<()>
where
    V: Validate,
{
    validator.validate(value)
}
