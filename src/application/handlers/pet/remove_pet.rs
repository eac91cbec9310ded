//! RemovePetHandler - Command handler for deleting a pet and its visits.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OwnerId, PetId};
use crate::ports::{PetRepository, VisitRepository};

/// Command to remove a pet from an owner.
#[derive(Debug, Clone, Copy)]
pub struct RemovePetCommand {
    pub owner_id: OwnerId,
    pub pet_id: PetId,
}

/// Handler for removing pets.
///
/// Visits have no life of their own once the pet is gone, so they are
/// deleted first.
pub struct RemovePetHandler {
    pets: Arc<dyn PetRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl RemovePetHandler {
    pub fn new(pets: Arc<dyn PetRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { pets, visits }
    }

    /// # Errors
    ///
    /// - `PetNotFound` if the pet doesn't exist or belongs to another owner
    pub async fn handle(&self, cmd: RemovePetCommand) -> Result<(), DomainError> {
        let pet = self
            .pets
            .find_by_id_and_owner_id(cmd.pet_id, cmd.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::PetNotFound, "Pet", cmd.pet_id))?;

        for visit in self.visits.find_by_pet_id(cmd.pet_id).await? {
            if let Some(visit_id) = visit.id() {
                self.visits.delete(visit_id).await?;
            }
        }
        self.pets.delete(cmd.pet_id).await?;
        tracing::info!(
            owner_id = %cmd.owner_id,
            pet_id = %cmd.pet_id,
            name = pet.name(),
            "pet removed"
        );
        Ok(())
    }
}
