//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, pagination types, and error types
//! that form the vocabulary of the clinic domain.

mod errors;
mod ids;
mod page;
mod timestamp;
mod validation;

pub use errors::{DomainError, ErrorCode};
pub use ids::{MedicationId, OwnerId, PetId, PetTypeId, SpecialtyId, VetId, VisitId};
pub use page::{Page, PageRequest};
pub use timestamp::Timestamp;
pub use validation::{FieldError, ValidationErrors};
