//! # kennel-validator
//!
//! Validation for pet records and the owners attached to them.
//!
//! ## Quick Start
//!
//! ```rust
//! use kennel_validator::prelude::*;
//!
//! let owner = Owner::new("6f1c0e6a-3c2b-4b8e-9a55-0c4a8f1d2e77", "Name owner", 33);
//! let pet = Pet::new("1b4e28ba-2fa1-11d2-883f-0016d3cca427", "Name Pet", 10).with_owner(&owner);
//! assert!(pet.validate().is_ok());
//!
//! let pet = Pet::new("invalidID", "Name Pet", 10);
//! let err = pet.validate().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidFormat);
//! assert_eq!(err.value(), Some("invalidID"));
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) rule trait, the
//!   [`Validatable`](foundation::Validatable) value trait, and
//!   [`ValidationError`](foundation::ValidationError).
//! - [`validators`]: the reusable leaf rules ([`UuidText`](validators::UuidText),
//!   [`LettersOrWhitespace`](validators::LettersOrWhitespace),
//!   [`Positive`](validators::Positive)).
//! - [`model`]: leaf values plus the [`Owner`](model::Owner) and
//!   [`Pet`](model::Pet) composites.
//! - `fixtures` (feature `test-util`): builders and object mothers for tests.
//!
//! Validation is fail-fast. Fields are checked in a fixed order
//! (identifier, name, age, then the attached owner) and the first failure
//! is returned.

// ValidationError is returned by value from every rule.
#![allow(clippy::result_large_err)]

pub mod foundation;
mod macros;
pub mod model;
pub mod prelude;
pub mod validators;

#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;
