//! Built-in rules
//!
//! One rule per leaf field category:
//!
//! - **Identifier**: [`UuidText`], canonical hyphenated UUID text
//! - **Name**: [`LettersOrWhitespace`], Unicode letters and whitespace only
//! - **Age**: [`Positive`], strictly greater than zero
//!
//! Each rule carries the [`Field`](crate::foundation::Field) it reports
//! failures under, so the same rule can back more than one value type.
//!
//! # Examples
//!
//! ```rust
//! use kennel_validator::foundation::{Field, Validate};
//! use kennel_validator::validators::{letters_or_whitespace, positive, uuid_text};
//!
//! assert!(uuid_text(Field::Identifier).validate("1b4e28ba-2fa1-11d2-883f-0016d3cca427").is_ok());
//! assert!(letters_or_whitespace(Field::Name).validate("Name Pet").is_ok());
//! assert!(positive(Field::Age).validate(&10).is_ok());
//! ```

pub mod pattern;
pub mod properties;
pub mod uuid_text;

pub use pattern::{LettersOrWhitespace, letters_or_whitespace};
pub use properties::{Positive, positive};
pub use uuid_text::{HYPHENATED_LEN, UuidText, uuid_text};
