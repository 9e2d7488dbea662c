//! Leaf values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{Field, Validatable, Validate, ValidationError};
use crate::validators::{LettersOrWhitespace, Positive, UuidText};

const IDENTIFIER_RULE: UuidText = UuidText::new(Field::Identifier);
const NAME_RULE: LettersOrWhitespace = LettersOrWhitespace::new(Field::Name);
const AGE_RULE: Positive = Positive::new(Field::Age);

// ============================================================================
// IDENTIFIER
// ============================================================================

/// A UUID identifier, kept as the text it was given.
///
/// Construction never fails; [`validate`](Validatable::validate) decides
/// whether the text is a canonical hyphenated UUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// A fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().hyphenated().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validatable for Identifier {
    fn validate(&self) -> Result<(), ValidationError> {
        IDENTIFIER_RULE.validate(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<uuid::Uuid> for Identifier {
    fn from(value: uuid::Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PERSON NAME
// ============================================================================

/// A display name made of letters and whitespace.
///
/// An empty name is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validatable for PersonName {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.validate(&self.0)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PersonName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// AGE VALUE
// ============================================================================

/// An age in whole years. Must be greater than zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AgeValue(i64);

impl AgeValue {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Validatable for AgeValue {
    fn validate(&self) -> Result<(), ValidationError> {
        AGE_RULE.validate(&self.0)
    }
}

impl fmt::Display for AgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AgeValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
