//! Prelude module for convenient imports.
//!
//! ```rust
//! use kennel_validator::prelude::*;
//!
//! let pet = Pet::new("1b4e28ba-2fa1-11d2-883f-0016d3cca427", "Name Pet", 10);
//! assert!(pet.validate().is_ok());
//! ```

pub use crate::foundation::{
    EntityKind, ErrorKind, Field, Validatable, Validate, ValidationError, ValidationResult,
    is_validation_failure,
};

pub use crate::model::{AgeValue, Identifier, Owner, PersonName, Pet, PetRecord};

pub use crate::validators::{
    LettersOrWhitespace, Positive, UuidText, letters_or_whitespace, positive, uuid_text,
};
