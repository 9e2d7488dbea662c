//! Numeric property rules

use crate::foundation::{Field, ValidationError};

crate::validator! {
    /// Validates that a number is strictly greater than zero.
    ///
    /// Zero is rejected; it is not treated as "unknown".
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Positive { field: Field } for i64;
    rule(self, input) { *input > 0 }
    error(self, input) { ValidationError::invalid_format(self.field, input.to_string()) }
    fn positive(field: Field);
}
