//! Error types for validation failures
//!
//! [`ValidationError`] is a closed, two-kind taxonomy:
//!
//! - [`InvalidFormat`](ValidationError::InvalidFormat): a leaf field broke its rule.
//! - [`NestedEntityInvalid`](ValidationError::NestedEntityInvalid): an attached
//!   entity failed, wrapped with the identity of the entity that holds it.
//!
//! Wrapping never discards the inner failure. It is reachable through
//! [`std::error::Error::source`], [`ValidationError::root_cause`] and
//! [`ValidationError::chain`], and [`is_validation_failure`] recognises a
//! validation failure anywhere in a foreign error's source chain.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use crate::model::Identifier;

// ============================================================================
// DISCRIMINATORS
// ============================================================================

/// The leaf field category a rule is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// A UUID identifier.
    Identifier,
    /// A display name.
    Name,
    /// An age in whole years.
    Age,
}

impl Field {
    /// Stable lowercase name, used in messages and structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Identifier => "identifier",
            Field::Name => "name",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composite entity kinds that take part in nested validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Owner,
    Pet,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Owner => "owner",
            EntityKind::Pet => "pet",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fieldless mirror of the [`ValidationError`] variants.
///
/// Lets callers branch on the failure kind without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFormat,
    NestedEntityInvalid,
}

impl ErrorKind {
    /// Error code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::NestedEntityInvalid => "nested_entity_invalid",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure, possibly wrapped with outer-entity context.
///
/// # Examples
///
/// ```rust
/// use kennel_validator::foundation::{EntityKind, ErrorKind, Field, ValidationError};
/// use kennel_validator::model::Identifier;
///
/// let leaf = ValidationError::invalid_format(Field::Age, "-10");
/// let wrapped = ValidationError::nested(
///     EntityKind::Pet,
///     Identifier::new("1b4e28ba-2fa1-11d2-883f-0016d3cca427"),
///     EntityKind::Owner,
///     leaf.clone(),
/// );
///
/// assert_eq!(wrapped.kind(), ErrorKind::NestedEntityInvalid);
/// assert_eq!(wrapped.root_cause(), &leaf);
/// assert_eq!(wrapped.field(), Some(Field::Age));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A leaf field failed its rule.
    #[error("invalid property {field} with value {value}{}", reason_suffix(.reason.as_deref()))]
    InvalidFormat {
        field: Field,
        /// The offending value, rendered as text.
        value: String,
        /// Underlying diagnostic, when the rule has one (UUID parsing does).
        reason: Option<String>,
    },

    /// An entity attached to `entity` failed validation.
    #[error("{nested} of {entity} {id} is invalid: {source}")]
    NestedEntityInvalid {
        /// Kind of the entity that holds the failing one.
        entity: EntityKind,
        /// Identifier of the holding entity.
        id: Identifier,
        /// Kind of the entity that failed.
        nested: EntityKind,
        source: Box<ValidationError>,
    },
}

fn reason_suffix(reason: Option<&str>) -> String {
    reason.map(|r| format!(": {r}")).unwrap_or_default()
}

impl ValidationError {
    /// Creates an `InvalidFormat` error without a diagnostic.
    pub fn invalid_format(field: Field, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
            reason: None,
        }
    }

    /// Creates an `InvalidFormat` error carrying the rule's diagnostic text.
    pub fn invalid_format_with_reason(
        field: Field,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
            reason: Some(reason.into()),
        }
    }

    /// Wraps `source` as the failure of a `nested` entity held by `entity`.
    pub fn nested(
        entity: EntityKind,
        id: Identifier,
        nested: EntityKind,
        source: ValidationError,
    ) -> Self {
        Self::NestedEntityInvalid {
            entity,
            id,
            nested,
            source: Box::new(source),
        }
    }

    /// Returns the kind of this level of the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::NestedEntityInvalid { .. } => ErrorKind::NestedEntityInvalid,
        }
    }

    /// Error code of this level of the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Walks nested wrapping down to the leaf failure.
    ///
    /// Returns `self` for an unwrapped leaf failure.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Self::NestedEntityInvalid { source, .. } = current {
            current = source;
        }
        current
    }

    /// Iterates over every wrapping level, outermost first, ending with the
    /// leaf failure.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of wrapping levels above the leaf failure.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Field category of the leaf failure.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self.root_cause() {
            Self::InvalidFormat { field, .. } => Some(*field),
            Self::NestedEntityInvalid { .. } => None,
        }
    }

    /// Offending value of the leaf failure.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self.root_cause() {
            Self::InvalidFormat { value, .. } => Some(value),
            Self::NestedEntityInvalid { .. } => None,
        }
    }

    /// Diagnostic of the leaf failure, if the rule produced one.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self.root_cause() {
            Self::InvalidFormat { reason, .. } => reason.as_deref(),
            Self::NestedEntityInvalid { .. } => None,
        }
    }

    /// Identifier of the outermost holding entity, for wrapped failures.
    #[must_use]
    pub fn entity_id(&self) -> Option<&Identifier> {
        match self {
            Self::NestedEntityInvalid { id, .. } => Some(id),
            Self::InvalidFormat { .. } => None,
        }
    }
}

// ============================================================================
// CHAIN WALKING
// ============================================================================

/// Iterator over the wrapping levels of a [`ValidationError`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ValidationError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ValidationError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current {
            ValidationError::NestedEntityInvalid { source, .. } => Some(source.as_ref()),
            ValidationError::InvalidFormat { .. } => None,
        };
        Some(current)
    }
}

/// Returns `true` if `err` or anything in its source chain is a
/// [`ValidationError`].
///
/// This is the stable "is this a validation failure" check. It does not look
/// at message text, so it keeps working after callers wrap the failure in
/// their own error types.
///
/// # Examples
///
/// ```rust
/// use kennel_validator::foundation::{Field, ValidationError, is_validation_failure};
///
/// let err = ValidationError::invalid_format(Field::Name, "invalid_name");
/// assert!(is_validation_failure(&err));
///
/// let io = std::io::Error::other("disk on fire");
/// assert!(!is_validation_failure(&io));
/// ```
pub fn is_validation_failure(err: &(dyn StdError + 'static)) -> bool {
    find_validation_failure(err).is_some()
}

/// Returns the first [`ValidationError`] in `err`'s source chain.
///
/// Wrapped levels are stored boxed, so a boxed failure counts too.
pub fn find_validation_failure<'a>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a ValidationError> {
    std::iter::successors(Some(err), |&e| e.source()).find_map(|e| {
        e.downcast_ref::<ValidationError>()
            .or_else(|| e.downcast_ref::<Box<ValidationError>>().map(|b| &**b))
    })
}

// ============================================================================
// TESTS
// ============================================================================
