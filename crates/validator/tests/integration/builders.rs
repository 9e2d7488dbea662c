//! Pets built through `PetBuilder` and the object mothers.

use kennel_validator::fixtures::{self, PetBuilder};
use kennel_validator::foundation::{ErrorKind, Field, Validatable, is_validation_failure};
use kennel_validator::model::{Identifier, Owner, Pet};
use rstest::rstest;

use crate::{VALID_AGE, VALID_NAME_PET, valid_owner};

/// Expected outcome of a case: `None` for valid, or the failing kind and
/// leaf field.
type Expected = Option<(ErrorKind, Field)>;

fn check(pet: &Pet<'_>, expected: Expected) {
    let result = pet.validate();
    match expected {
        None => assert!(result.is_ok(), "expected valid, got {result:?}"),
        Some((kind, field)) => {
            let err = result.expect_err("expected a validation failure");
            assert!(is_validation_failure(&err));
            assert_eq!(err.kind(), kind);
            assert_eq!(err.field(), Some(field));
        }
    }
}

#[rstest]
#[case::valid_pet(Some(VALID_AGE), None, true, None)]
#[case::valid_pet_with_empty_owner(Some(VALID_AGE), None, false, None)]
#[case::invalid_id(
    Some(VALID_AGE),
    Some("invalidID"),
    true,
    Some((ErrorKind::InvalidFormat, Field::Identifier))
)]
#[case::invalid_age(Some(-10), None, true, Some((ErrorKind::InvalidFormat, Field::Age)))]
fn with_builder(
    #[case] age: Option<i64>,
    #[case] id: Option<&str>,
    #[case] attach_owner: bool,
    #[case] expected: Expected,
) {
    let owner = valid_owner();
    let mut builder = PetBuilder::new()
        .with_id(id.map_or_else(Identifier::generate, Identifier::from))
        .with_name(VALID_NAME_PET);
    if let Some(age) = age {
        builder = builder.with_age(age);
    }
    if attach_owner {
        builder = builder.with_owner(&owner);
    }
    check(&builder.build(), expected);
}

#[test]
fn with_builder_invalid_name() {
    let owner = valid_owner();
    let pet = PetBuilder::new()
        .with_id(Identifier::generate())
        .with_name("invalid_name")
        .with_age(VALID_AGE)
        .with_owner(&owner)
        .build();
    check(&pet, Some((ErrorKind::InvalidFormat, Field::Name)));
}

#[test]
fn with_builder_invalid_owner_and_age() {
    // Own age is checked before the owner, so the age failure wins.
    let bad_owner = Owner::new(Identifier::generate(), "invalid_owner_name", 33);
    let pet = PetBuilder::new()
        .with_id(Identifier::generate())
        .with_name(VALID_NAME_PET)
        .with_age(-10)
        .with_owner(&bad_owner)
        .build();
    check(&pet, Some((ErrorKind::InvalidFormat, Field::Age)));
}

#[test]
fn object_mother_valid_pet() {
    let owner = fixtures::owner();
    check(&fixtures::pet(&owner).build(), None);
}

#[test]
fn object_mother_valid_pet_with_empty_owner() {
    check(&fixtures::pet_without_owner().build(), None);
}

#[rstest]
#[case::invalid_id(fixtures::pet_without_owner().with_id("invalidID"), Field::Identifier)]
#[case::invalid_name(fixtures::pet_without_owner().with_name("invalid_name"), Field::Name)]
#[case::invalid_age(fixtures::pet_without_owner().with_age(-3), Field::Age)]
fn object_mother_invalid_own_field(#[case] builder: PetBuilder<'static>, #[case] field: Field) {
    let owner = fixtures::owner();
    let pet = Pet {
        owner: Some(&owner),
        ..builder.build()
    };
    check(&pet, Some((ErrorKind::InvalidFormat, field)));
}

#[test]
fn object_mother_invalid_owner() {
    let bad_owner = Owner::new(Identifier::generate(), "invalid_owner_name", 33);
    let pet = fixtures::pet(&bad_owner).build();
    check(&pet, Some((ErrorKind::NestedEntityInvalid, Field::Name)));
}
