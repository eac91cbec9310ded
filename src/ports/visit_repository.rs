//! Visit repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PetId, VisitId};
use crate::domain::owner::Visit;

/// Repository port for Visit persistence.
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Save a new or updated visit, assigning an id on first save.
    async fn save(&self, visit: &Visit) -> Result<Visit, DomainError>;

    /// All visits of a pet, in insertion order.
    async fn find_by_pet_id(&self, pet_id: PetId) -> Result<Vec<Visit>, DomainError>;

    /// Delete a visit.
    ///
    /// # Errors
    ///
    /// - `VisitNotFound` if the visit doesn't exist
    async fn delete(&self, id: VisitId) -> Result<(), DomainError>;
}
