//! Property-based tests for the leaf rules and short-circuit order.

use kennel_validator::foundation::{ErrorKind, Field, Validatable};
use kennel_validator::model::{AgeValue, Identifier, PersonName, Pet};
use proptest::prelude::*;

/// Letters and whitespace drawn from several scripts.
fn letters_and_whitespace() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z'),
            proptest::char::range('A', 'Z'),
            proptest::char::range('à', 'ÿ').prop_filter("letter", |c| *c != '÷'),
            proptest::char::range('а', 'я'),
            Just(' '),
            Just('\t'),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Characters that are neither letters nor whitespace.
fn offending_char() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('0', '9'),
        Just('_'),
        Just('-'),
        Just('!'),
        Just('.'),
        Just('@'),
        Just('$'),
        Just('♥'),
        Just('\u{216B}'),
        Just('\u{3007}'),
        Just('\u{0947}'),
    ]
}

proptest! {
    #[test]
    fn uuid_text_round_trips(bytes in any::<[u8; 16]>()) {
        let id = Identifier::from(uuid::Uuid::from_bytes(bytes));
        prop_assert!(id.validate().is_ok());
    }

    #[test]
    fn non_uuid_text_is_rejected(s in "[g-z_ ]{0,40}") {
        let err = Identifier::new(s.clone()).validate().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        prop_assert_eq!(err.value(), Some(s.as_str()));
    }

    #[test]
    fn letters_and_whitespace_pass(name in letters_and_whitespace()) {
        prop_assert!(PersonName::new(name).validate().is_ok());
    }

    #[test]
    fn one_offending_char_fails(
        prefix in letters_and_whitespace(),
        bad in offending_char(),
        suffix in letters_and_whitespace(),
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        let err = PersonName::new(name.clone()).validate().unwrap_err();
        prop_assert_eq!(err.field(), Some(Field::Name));
        prop_assert_eq!(err.value(), Some(name.as_str()));
    }

    #[test]
    fn non_positive_ages_fail(age in i64::MIN..=0) {
        prop_assert!(AgeValue::new(age).validate().is_err());
    }

    #[test]
    fn positive_ages_pass(age in 1..=i64::MAX) {
        prop_assert!(AgeValue::new(age).validate().is_ok());
    }

    #[test]
    fn invalid_id_wins_over_invalid_age(
        id in "[g-z]{1,12}",
        age in i64::MIN..=0,
    ) {
        let err = Pet::new(id, "Name Pet", age).validate().unwrap_err();
        prop_assert_eq!(err.field(), Some(Field::Identifier));
    }
}
