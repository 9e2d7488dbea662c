//! Pets built directly from field values.

use kennel_validator::foundation::{ErrorKind, Field, Validatable, is_validation_failure};
use kennel_validator::model::{Identifier, Owner, Pet};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use crate::{VALID_AGE, VALID_NAME_PET, valid_owner};

#[fixture]
fn owner() -> Owner {
    valid_owner()
}

#[fixture]
fn pet_id() -> Identifier {
    Identifier::generate()
}

#[rstest]
fn valid_pet(owner: Owner, pet_id: Identifier) {
    let pet = Pet::new(pet_id, VALID_NAME_PET, VALID_AGE).with_owner(&owner);
    assert!(pet.validate().is_ok());
}

#[rstest]
fn valid_pet_with_empty_owner(pet_id: Identifier) {
    let pet = Pet::new(pet_id, VALID_NAME_PET, VALID_AGE);
    assert!(pet.owner.is_none());
    assert!(pet.validate().is_ok());
}

#[rstest]
fn invalid_id(owner: Owner) {
    let pet = Pet::new("invalidID", VALID_NAME_PET, VALID_AGE).with_owner(&owner);
    let err = pet.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.field(), Some(Field::Identifier));
    assert_eq!(err.value(), Some("invalidID"));
    assert!(is_validation_failure(&err));
}

#[rstest]
fn invalid_name(owner: Owner, pet_id: Identifier) {
    let pet = Pet::new(pet_id, "invalid_name", VALID_AGE).with_owner(&owner);
    let err = pet.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.value(), Some("invalid_name"));
    assert!(is_validation_failure(&err));
}

#[rstest]
fn invalid_age(owner: Owner, pet_id: Identifier) {
    let pet = Pet::new(pet_id, VALID_NAME_PET, -10).with_owner(&owner);
    let err = pet.validate().unwrap_err();
    assert_eq!(err.field(), Some(Field::Age));
    assert_eq!(err.value(), Some("-10"));
}

#[rstest]
fn invalid_owner(owner: Owner, pet_id: Identifier) {
    let bad_owner = Owner {
        name: "invalid_owner_name".into(),
        ..owner
    };
    let pet = Pet::new(pet_id.clone(), VALID_NAME_PET, VALID_AGE).with_owner(&bad_owner);

    let err = pet.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestedEntityInvalid);
    assert_eq!(err.entity_id(), Some(&pet_id));
    assert_eq!(err.root_cause().kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.value(), Some("invalid_owner_name"));
    assert!(is_validation_failure(&err));
}
