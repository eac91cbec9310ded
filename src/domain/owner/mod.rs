//! Owner aggregate and its owned entities.
//!
//! The Owner is the aggregate root: pets and visits are created and removed
//! through their owner. Pet types are shared reference data keyed from here
//! because pets reference them.

mod aggregate;
mod pet;
mod pet_type;
mod validators;
mod visit;

pub use aggregate::{Address, Owner};
pub use pet::Pet;
pub use pet_type::PetType;
pub use validators::{validate_owner, validate_pet, validate_visit};
pub use visit::{Prescription, Visit};
