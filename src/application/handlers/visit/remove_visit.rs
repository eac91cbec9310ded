//! RemoveVisitHandler - Command handler for deleting a recorded visit.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OwnerId, PetId, VisitId};
use crate::ports::{PetRepository, VisitRepository};

/// Command to remove a visit from a pet's history.
#[derive(Debug, Clone, Copy)]
pub struct RemoveVisitCommand {
    pub owner_id: OwnerId,
    pub pet_id: PetId,
    pub visit_id: VisitId,
}

/// Handler for removing visits.
///
/// The pet is resolved through its owner first, so a visit can only be
/// removed through the pet it belongs to.
pub struct RemoveVisitHandler {
    pets: Arc<dyn PetRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl RemoveVisitHandler {
    pub fn new(pets: Arc<dyn PetRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { pets, visits }
    }

    /// # Errors
    ///
    /// - `PetNotFound` if the pet doesn't exist or belongs to another owner
    /// - `VisitNotFound` if the visit doesn't exist or belongs to another pet
    pub async fn handle(&self, cmd: RemoveVisitCommand) -> Result<(), DomainError> {
        self.pets
            .find_by_id_and_owner_id(cmd.pet_id, cmd.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::PetNotFound, "Pet", cmd.pet_id))?;

        let belongs = self
            .visits
            .find_by_pet_id(cmd.pet_id)
            .await?
            .iter()
            .any(|visit| visit.id() == Some(cmd.visit_id));
        if !belongs {
            return Err(DomainError::not_found(
                ErrorCode::VisitNotFound,
                "Visit",
                cmd.visit_id,
            ));
        }

        self.visits.delete(cmd.visit_id).await?;
        tracing::info!(pet_id = %cmd.pet_id, visit_id = %cmd.visit_id, "visit removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPetRepository, InMemoryVisitRepository};
    use crate::domain::owner::{Pet, Visit};
    use chrono::NaiveDate;

    struct Fixture {
        visits: Arc<InMemoryVisitRepository>,
        owner_id: OwnerId,
        pet_id: PetId,
        visit_id: VisitId,
        handler: RemoveVisitHandler,
    }

    async fn fixture() -> Fixture {
        let pets = Arc::new(InMemoryPetRepository::new());
        let visits = Arc::new(InMemoryVisitRepository::new());

        let owner_id = OwnerId::new(6);
        let mut samantha = Pet::new("Samantha");
        samantha.set_owner_id(Some(owner_id));
        let samantha = pets.save(&samantha).await.unwrap();
        let pet_id = samantha.id().unwrap();

        let mut visit = Visit::new(NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(), "rabies shot");
        visit.set_pet_id(Some(pet_id));
        let visit = visits.save(&visit).await.unwrap();

        let handler = RemoveVisitHandler::new(pets, visits.clone());
        Fixture {
            visits,
            owner_id,
            pet_id,
            visit_id: visit.id().unwrap(),
            handler,
        }
    }

    #[tokio::test]
    async fn visit_is_deleted() {
        let fx = fixture().await;
        fx.handler
            .handle(RemoveVisitCommand {
                owner_id: fx.owner_id,
                pet_id: fx.pet_id,
                visit_id: fx.visit_id,
            })
            .await
            .unwrap();
        assert!(fx.visits.find_by_pet_id(fx.pet_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn visit_of_another_pet_is_not_found() {
        let fx = fixture().await;
        let err = fx
            .handler
            .handle(RemoveVisitCommand {
                owner_id: fx.owner_id,
                pet_id: fx.pet_id,
                visit_id: VisitId::new(999),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::VisitNotFound);
    }

    #[tokio::test]
    async fn wrong_owner_is_pet_not_found() {
        let fx = fixture().await;
        let err = fx
            .handler
            .handle(RemoveVisitCommand {
                owner_id: OwnerId::new(999),
                pet_id: fx.pet_id,
                visit_id: fx.visit_id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PetNotFound);
        assert_eq!(fx.visits.find_by_pet_id(fx.pet_id).await.unwrap().len(), 1);
    }
}
