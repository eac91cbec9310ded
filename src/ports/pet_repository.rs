//! Pet repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId, PetId};
use crate::domain::owner::Pet;

/// Repository port for Pet persistence.
///
/// Pets are stored without hydrated type or visits; those are attached by
/// the application layer when an owner aggregate is loaded.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Save a new or updated pet, assigning an id on first save.
    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError>;

    /// All pets of an owner, in insertion order.
    async fn find_by_owner_id(&self, owner_id: OwnerId) -> Result<Vec<Pet>, DomainError>;

    /// Find a pet by id, scoped to its owner. Returns `None` if the pet
    /// does not exist or belongs to a different owner.
    async fn find_by_id_and_owner_id(
        &self,
        id: PetId,
        owner_id: OwnerId,
    ) -> Result<Option<Pet>, DomainError>;

    /// Delete a pet.
    ///
    /// # Errors
    ///
    /// - `PetNotFound` if the pet doesn't exist
    async fn delete(&self, id: PetId) -> Result<(), DomainError>;
}
