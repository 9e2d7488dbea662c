use serde::Serialize;

use super::{AgeValue, Identifier, Owner, PersonName};
use crate::foundation::{EntityKind, Validatable, ValidationError};

/// A pet, optionally attached to an [`Owner`].
///
/// The owner is borrowed: a pet only reads its owner during validation and
/// never needs to outlive it.
///
/// Validation runs as a fixed sequence and stops at the first failure:
///
/// 1. identifier
/// 2. name
/// 3. age
/// 4. attached owner, if any
///
/// Own-field failures are returned as is. An owner failure is wrapped in
/// [`ValidationError::NestedEntityInvalid`] with this pet's identifier, the
/// owner's failure kept as the source.
///
/// # Examples
///
/// ```rust
/// use kennel_validator::foundation::{ErrorKind, Field, Validatable};
/// use kennel_validator::model::{Owner, Pet};
///
/// let owner = Owner::new("6f1c0e6a-3c2b-4b8e-9a55-0c4a8f1d2e77", "Name owner", -10);
/// let pet = Pet::new("1b4e28ba-2fa1-11d2-883f-0016d3cca427", "Name Pet", 10)
///     .with_owner(&owner);
///
/// let err = pet.validate().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NestedEntityInvalid);
/// assert_eq!(err.root_cause().kind(), ErrorKind::InvalidFormat);
/// assert_eq!(err.field(), Some(Field::Age));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pet<'a> {
    pub id: Identifier,
    pub name: PersonName,
    pub age: AgeValue,
    pub owner: Option<&'a Owner>,
}

impl<'a> Pet<'a> {
    /// Creates a pet with no owner attached.
    pub fn new(
        id: impl Into<Identifier>,
        name: impl Into<PersonName>,
        age: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: AgeValue::new(age),
            owner: None,
        }
    }

    /// Attaches `owner`.
    pub fn with_owner(mut self, owner: &'a Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    fn validate_own_fields(&self) -> Result<(), ValidationError> {
        self.id.validate()?;
        self.name.validate()?;
        self.age.validate()
    }
}

impl Validatable for Pet<'_> {
    fn validate(&self) -> Result<(), ValidationError> {
        tracing::trace!(pet.id = %self.id, has_owner = self.owner.is_some(), "validating pet");

        if let Err(err) = self.validate_own_fields() {
            tracing::debug!(pet.id = %self.id, field = ?err.field(), error = %err, "pet is invalid");
            return Err(err);
        }

        let Some(owner) = self.owner else {
            return Ok(());
        };

        owner.validate().map_err(|err| {
            tracing::debug!(pet.id = %self.id, owner.id = %owner.id, "owner of pet is invalid");
            ValidationError::nested(EntityKind::Pet, self.id.clone(), EntityKind::Owner, err)
        })
    }
}
