use serde::{Deserialize, Serialize};

use super::{AgeValue, Identifier, PersonName};
use crate::foundation::{Validatable, ValidationError};

/// The person responsible for a [`Pet`](super::Pet).
///
/// Fields are plain public attributes; nothing stops a caller from putting
/// invalid data in them. [`validate`](Validatable::validate) reports the
/// first field that breaks its rule, checked as id, then name, then age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Identifier,
    pub name: PersonName,
    pub age: AgeValue,
}

impl Owner {
    pub fn new(
        id: impl Into<Identifier>,
        name: impl Into<PersonName>,
        age: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: AgeValue::new(age),
        }
    }
}

impl Validatable for Owner {
    /// Leaf failures are returned unwrapped.
    fn validate(&self) -> Result<(), ValidationError> {
        tracing::trace!(owner.id = %self.id, "validating owner");

        let result = self
            .id
            .validate()
            .and_then(|()| self.name.validate())
            .and_then(|()| self.age.validate());

        if let Err(err) = &result {
            tracing::debug!(owner.id = %self.id, field = ?err.field(), error = %err, "owner is invalid");
        }
        result
    }
}
