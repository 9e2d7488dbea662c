//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: create a rule (struct + `Validate` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use kennel_validator::validator;
//! use kennel_validator::foundation::{Field, ValidationError};
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub NonEmpty { field: Field } for str;
//!     rule(self, input) { !input.is_empty() }
//!     error(self, input) { ValidationError::invalid_format(self.field, input) }
//!     fn non_empty(field: Field);
//! }
//! ```

/// Creates a rule: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// The `rule` block is the passing condition; the `error` block builds the
/// failure when it does not hold.
#[macro_export]
macro_rules! validator {
    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
