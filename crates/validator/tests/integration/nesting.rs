//! Owner failures surfacing through a pet.

use kennel_validator::foundation::{
    EntityKind, ErrorKind, Field, Validatable, ValidationError, find_validation_failure,
    is_validation_failure,
};
use kennel_validator::model::{Identifier, Owner, Pet};
use pretty_assertions::assert_eq;

#[derive(Debug, thiserror::Error)]
enum AdoptionError {
    #[error("adoption rejected")]
    Rejected(#[from] ValidationError),
    #[error("shelter closed")]
    Closed,
}

fn negative_age_owner() -> Owner {
    Owner::new(Identifier::generate(), "Name owner", -10)
}

#[test]
fn owner_with_negative_age_fails_on_age() {
    let err = negative_age_owner().validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.field(), Some(Field::Age));
}

#[test]
fn pet_chains_the_same_owner_failure() {
    let owner = negative_age_owner();
    let owner_err = owner.validate().unwrap_err();
    let pet_id = Identifier::generate();
    let pet = Pet::new(pet_id.clone(), "Name Pet", 10).with_owner(&owner);

    let err = pet.validate().unwrap_err();
    match &err {
        ValidationError::NestedEntityInvalid {
            entity,
            id,
            nested,
            source,
        } => {
            assert_eq!(*entity, EntityKind::Pet);
            assert_eq!(*nested, EntityKind::Owner);
            assert_eq!(id, &pet_id);
            assert_eq!(&**source, &owner_err);
        }
        other => panic!("expected nested failure, got {other:?}"),
    }
}

#[test]
fn chain_walks_from_pet_to_leaf() {
    let owner = negative_age_owner();
    let err = Pet::new(Identifier::generate(), "Name Pet", 10)
        .with_owner(&owner)
        .validate()
        .unwrap_err();

    let codes: Vec<_> = err.chain().map(ValidationError::code).collect();
    assert_eq!(codes, vec!["nested_entity_invalid", "invalid_format"]);
}

#[test]
fn marker_survives_caller_wrapping() {
    let owner = negative_age_owner();
    let pet = Pet::new(Identifier::generate(), "Name Pet", 10).with_owner(&owner);
    let err = AdoptionError::from(pet.validate().unwrap_err());

    assert!(is_validation_failure(&err));
    let found = find_validation_failure(&err).expect("validation failure in chain");
    assert_eq!(found.root_cause().field(), Some(Field::Age));

    assert!(!is_validation_failure(&AdoptionError::Closed));
}

#[test]
fn absent_owner_is_never_checked() {
    let pet = Pet::new(Identifier::generate(), "Name Pet", 10);
    assert!(pet.validate().is_ok());
    assert!(pet.owner.validate().is_ok());
}
