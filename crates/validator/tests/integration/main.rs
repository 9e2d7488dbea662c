//! Integration tests for kennel-validator.

mod builders;
mod direct;
mod nesting;
mod properties;

use kennel_validator::model::{Identifier, Owner};

pub const VALID_NAME_PET: &str = "Name Pet";
pub const VALID_NAME_OWNER: &str = "Name owner";
pub const VALID_AGE: i64 = 10;

pub fn valid_owner() -> Owner {
    Owner::new(Identifier::generate(), VALID_NAME_OWNER, 33)
}
