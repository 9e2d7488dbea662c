use serde::{Deserialize, Serialize};

use super::{AgeValue, Identifier, Owner, PersonName, Pet};
use crate::foundation::{Validatable, ValidationError};

/// Owned pet record, as read from a document.
///
/// Holds its owner by value so it can be deserialised on its own, and
/// validates by borrowing itself as a [`Pet`].
///
/// ```rust
/// use kennel_validator::foundation::Validatable;
/// use kennel_validator::model::PetRecord;
///
/// let record: PetRecord = serde_json::from_str(r#"{
///     "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
///     "name": "Name Pet",
///     "age": 10
/// }"#).unwrap();
/// assert!(record.owner.is_none());
/// assert!(record.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(default)]
    pub id: Identifier,
    #[serde(default)]
    pub name: PersonName,
    #[serde(default)]
    pub age: AgeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl PetRecord {
    /// Borrows this record as a [`Pet`].
    #[must_use]
    pub fn as_pet(&self) -> Pet<'_> {
        Pet {
            id: self.id.clone(),
            name: self.name.clone(),
            age: self.age,
            owner: self.owner.as_ref(),
        }
    }
}

impl From<&Pet<'_>> for PetRecord {
    fn from(pet: &Pet<'_>) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            age: pet.age,
            owner: pet.owner.cloned(),
        }
    }
}

impl Validatable for PetRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_pet().validate()
    }
}
