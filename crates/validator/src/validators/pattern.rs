//! String pattern rules

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::foundation::{Field, ValidationError};

/// `true` for general category L (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`) or whitespace.
///
/// Letter numbers such as `Ⅻ` and combining marks are not letters.
fn is_letter_or_whitespace(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

crate::validator! {
    /// Validates that every character is a Unicode letter or whitespace.
    ///
    /// Classification is per `char` (Unicode scalar value), never per byte,
    /// so multi-byte letters such as `é` or `Ж` pass. The empty string has
    /// no offending character and passes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LettersOrWhitespace { field: Field } for str;
    rule(self, input) {
        input.chars().all(is_letter_or_whitespace)
    }
    error(self, input) { ValidationError::invalid_format(self.field, input) }
    fn letters_or_whitespace(field: Field);
}
