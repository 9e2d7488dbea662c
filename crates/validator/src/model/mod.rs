//! Pet and owner records.
//!
//! Three leaf values ([`Identifier`], [`PersonName`], [`AgeValue`]) each
//! carry one rule. Two composites aggregate them:
//!
//! - [`Owner`] checks id, name, age and returns the first leaf failure as is.
//! - [`Pet`] checks its own id, name, age the same way, then the attached
//!   owner if there is one. An owner failure is wrapped as
//!   [`NestedEntityInvalid`](crate::foundation::ValidationError::NestedEntityInvalid)
//!   carrying the pet's identifier.
//!
//! [`PetRecord`] is the owned form used when records are read from
//! documents; it borrows itself as a [`Pet`] for validation.

mod owner;
mod pet;
mod record;
mod values;

pub use owner::Owner;
pub use pet::Pet;
pub use record::PetRecord;
pub use values::{AgeValue, Identifier, PersonName};
