//! UUID text rule

use crate::foundation::{Field, Validate, ValidationError};

/// Length of the canonical hyphenated form, `8-4-4-4-12` hex digits.
pub const HYPHENATED_LEN: usize = 36;

/// Validates canonical hyphenated UUID text.
///
/// Any version is accepted, including the nil UUID. Text the `uuid` crate
/// would accept in another form (simple, braced, URN) is rejected: the
/// identifier must be stored the way it is displayed.
///
/// The parser's own diagnostic is kept as the failure reason.
///
/// # Examples
///
/// ```rust
/// use kennel_validator::foundation::{Field, Validate};
/// use kennel_validator::validators::uuid_text;
///
/// let rule = uuid_text(Field::Identifier);
/// assert!(rule.validate("1b4e28ba-2fa1-11d2-883f-0016d3cca427").is_ok());
/// assert!(rule.validate("1b4e28ba2fa111d2883f0016d3cca427").is_err());
/// assert!(rule.validate("invalidID").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UuidText {
    pub field: Field,
}

impl UuidText {
    #[must_use]
    pub const fn new(field: Field) -> Self {
        Self { field }
    }
}

impl Validate for UuidText {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match uuid::Uuid::try_parse(input) {
            Ok(_) if input.len() == HYPHENATED_LEN => Ok(()),
            Ok(_) => Err(ValidationError::invalid_format_with_reason(
                self.field,
                input,
                "expected hyphenated form",
            )),
            Err(e) => Err(ValidationError::invalid_format_with_reason(
                self.field,
                input,
                e.to_string(),
            )),
        }
    }
}

/// Creates a [`UuidText`] rule reporting under `field`.
#[must_use]
pub const fn uuid_text(field: Field) -> UuidText {
    UuidText::new(field)
}
