//! Test-data builders and object mothers.
//!
//! Compiled for this crate's own tests and, behind the `test-util`
//! feature, for downstream test suites.
//!
//! [`PetBuilder`] starts from empty fields; the object mothers
//! ([`owner`], [`pet`], [`pet_without_owner`]) start from valid defaults.
//! Both let individual fields be overridden before [`PetBuilder::build`].
//!
//! ```rust
//! use kennel_validator::fixtures;
//! use kennel_validator::foundation::Validatable;
//!
//! let owner = fixtures::owner();
//! assert!(fixtures::pet(&owner).build().validate().is_ok());
//! assert!(fixtures::pet(&owner).with_age(-3).build().validate().is_err());
//! ```

use crate::model::{AgeValue, Identifier, Owner, PersonName, Pet};

pub const DEFAULT_PET_NAME: &str = "Dummy Pet Name";
pub const DEFAULT_PET_AGE: i64 = 10;
pub const DEFAULT_OWNER_NAME: &str = "Dummy Owner Name";
pub const DEFAULT_OWNER_AGE: i64 = 33;

/// Builder for [`Pet`] values.
#[derive(Debug, Clone, Default)]
pub struct PetBuilder<'a> {
    pet: Pet<'a>,
}

impl<'a> PetBuilder<'a> {
    /// Empty id and name, zero age, no owner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.pet.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<PersonName>) -> Self {
        self.pet.name = name.into();
        self
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.pet.age = AgeValue::new(age);
        self
    }

    pub fn with_owner(mut self, owner: &'a Owner) -> Self {
        self.pet.owner = Some(owner);
        self
    }

    pub fn without_owner(mut self) -> Self {
        self.pet.owner = None;
        self
    }

    #[must_use]
    pub fn build(self) -> Pet<'a> {
        self.pet
    }
}

/// A valid owner with a fresh identifier.
#[must_use]
pub fn owner() -> Owner {
    Owner::new(Identifier::generate(), DEFAULT_OWNER_NAME, DEFAULT_OWNER_AGE)
}

/// A valid pet attached to `owner`, with a fresh identifier.
#[must_use]
pub fn pet(owner: &Owner) -> PetBuilder<'_> {
    pet_without_owner().with_owner(owner)
}

/// A valid pet with no owner, with a fresh identifier.
#[must_use]
pub fn pet_without_owner<'a>() -> PetBuilder<'a> {
    PetBuilder::new()
        .with_id(Identifier::generate())
        .with_name(DEFAULT_PET_NAME)
        .with_age(DEFAULT_PET_AGE)
}
