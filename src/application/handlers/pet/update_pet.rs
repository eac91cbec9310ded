//! UpdatePetHandler - Command handler for editing an existing pet.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::OwnerLoader;
use crate::domain::foundation::{DomainError, ErrorCode, OwnerId, PetId, PetTypeId};
use crate::domain::owner::{validate_pet, Pet};
use crate::ports::{OwnerRepository, PetRepository, PetTypeRepository};

/// Command to update one of an owner's pets.
#[derive(Debug, Clone)]
pub struct UpdatePetCommand {
    pub owner_id: OwnerId,
    pub pet_id: PetId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type_id: Option<PetTypeId>,
    pub today: NaiveDate,
}

/// Handler for updating pets.
///
/// The rename check spans the whole pet collection but excludes the pet
/// being edited, so keeping the current name is never a conflict.
pub struct UpdatePetHandler {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
    pet_types: Arc<dyn PetTypeRepository>,
    loader: OwnerLoader,
}

impl UpdatePetHandler {
    pub fn new(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        pet_types: Arc<dyn PetTypeRepository>,
        loader: OwnerLoader,
    ) -> Self {
        Self {
            owners,
            pets,
            pet_types,
            loader,
        }
    }

    /// # Errors
    ///
    /// - `OwnerNotFound` if the owner doesn't exist
    /// - `PetNotFound` if the pet doesn't exist or belongs to another owner
    /// - `PetTypeNotFound` if the referenced pet type doesn't exist
    /// - `ValidationFailed` with every violated field collected, including
    ///   a `name` entry when the new name collides with a sibling pet
    pub async fn handle(&self, cmd: UpdatePetCommand) -> Result<Pet, DomainError> {
        let owner = self
            .owners
            .find_by_id(cmd.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::OwnerNotFound, "Owner", cmd.owner_id))?;
        let owner = self.loader.load(owner).await?;

        let mut pet = owner
            .pet_by_id(cmd.pet_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(ErrorCode::PetNotFound, "Pet", cmd.pet_id))?;

        pet.rename(cmd.name.clone());
        pet.set_birth_date(cmd.birth_date);
        if let Some(type_id) = cmd.pet_type_id {
            let pet_type = self.pet_types.find_by_id(type_id).await?.ok_or_else(|| {
                DomainError::not_found(ErrorCode::PetTypeNotFound, "PetType", type_id)
            })?;
            pet.set_type(pet_type);
        }

        let mut errors = validate_pet(&pet, cmd.today);
        if !cmd.name.trim().is_empty() {
            let collision = owner
                .pet_by_name(&cmd.name, false)
                .is_some_and(|other| other.id() != Some(cmd.pet_id));
            if collision {
                errors.add("name", "is already in use");
            }
        }
        errors.into_result()?;

        let saved = self.pets.save(&pet).await?;
        tracing::info!(owner_id = %cmd.owner_id, pet_id = %cmd.pet_id, "pet updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryOwnerRepository, InMemoryPetRepository, InMemoryPetTypeRepository,
        InMemoryVisitRepository,
    };
    use crate::domain::owner::{Address, Owner, PetType};
    use crate::ports::VisitRepository;
    use crate::domain::owner::Visit;

    struct Fixture {
        pets: Arc<InMemoryPetRepository>,
        visits: Arc<InMemoryVisitRepository>,
        owner_id: OwnerId,
        cat_id: PetTypeId,
        samantha_id: PetId,
        max_id: PetId,
        handler: UpdatePetHandler,
    }

    async fn fixture() -> Fixture {
        let owners = Arc::new(InMemoryOwnerRepository::new());
        let pets = Arc::new(InMemoryPetRepository::new());
        let pet_types = Arc::new(InMemoryPetTypeRepository::new());
        let visits = Arc::new(InMemoryVisitRepository::new());

        let owner = owners
            .save(&Owner::new(
                "Jean",
                "Coleman",
                Address::new("105 N. Lake St.", "Monona"),
                "6085552654",
                None,
            ))
            .await
            .unwrap();
        let cat = pet_types.save(&PetType::new("cat")).await.unwrap();

        let mut samantha = Pet::new("Samantha");
        samantha.set_type(cat.clone());
        samantha.set_owner_id(owner.id());
        let samantha = pets.save(&samantha).await.unwrap();

        let mut max = Pet::new("Max");
        max.set_type(cat.clone());
        max.set_owner_id(owner.id());
        let max = pets.save(&max).await.unwrap();

        let loader = OwnerLoader::new(pets.clone(), pet_types.clone(), visits.clone());
        let handler = UpdatePetHandler::new(owners, pets.clone(), pet_types, loader);
        Fixture {
            pets,
            visits,
            owner_id: owner.id().unwrap(),
            cat_id: cat.id().unwrap(),
            samantha_id: samantha.id().unwrap(),
            max_id: max.id().unwrap(),
            handler,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn command(fx: &Fixture, pet_id: PetId, name: &str) -> UpdatePetCommand {
        UpdatePetCommand {
            owner_id: fx.owner_id,
            pet_id,
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2012, 9, 4),
            pet_type_id: Some(fx.cat_id),
            today: today(),
        }
    }

    #[tokio::test]
    async fn rename_to_a_free_name_is_persisted() {
        let fx = fixture().await;
        let saved = fx
            .handler
            .handle(command(&fx, fx.samantha_id, "Sammy"))
            .await
            .unwrap();
        assert_eq!(saved.name(), "Sammy");

        let stored = fx
            .pets
            .find_by_id_and_owner_id(fx.samantha_id, fx.owner_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name(), "Sammy");
    }

    #[tokio::test]
    async fn keeping_the_current_name_is_not_a_conflict() {
        let fx = fixture().await;
        let saved = fx
            .handler
            .handle(command(&fx, fx.samantha_id, "Samantha"))
            .await
            .unwrap();
        assert_eq!(saved.name(), "Samantha");
    }

    #[tokio::test]
    async fn renaming_onto_a_sibling_is_rejected() {
        let fx = fixture().await;
        let err = fx
            .handler
            .handle(command(&fx, fx.samantha_id, "max"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.contains_key("name"));

        let unchanged = fx
            .pets
            .find_by_id_and_owner_id(fx.samantha_id, fx.owner_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.name(), "Samantha");
        assert_ne!(fx.max_id, fx.samantha_id);
    }

    #[tokio::test]
    async fn pet_of_another_owner_is_not_found() {
        let fx = fixture().await;
        let mut cmd = command(&fx, fx.samantha_id, "Sammy");
        cmd.owner_id = OwnerId::new(999);
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OwnerNotFound);
    }

    #[tokio::test]
    async fn unknown_pet_is_not_found() {
        let fx = fixture().await;
        let err = fx
            .handler
            .handle(command(&fx, PetId::new(999), "Sammy"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PetNotFound);
    }

    #[tokio::test]
    async fn update_keeps_existing_visits_attached() {
        let fx = fixture().await;
        let mut visit = Visit::new(today(), "checkup");
        visit.set_pet_id(Some(fx.samantha_id));
        fx.visits.save(&visit).await.unwrap();

        fx.handler
            .handle(command(&fx, fx.samantha_id, "Sammy"))
            .await
            .unwrap();

        let remaining = fx.visits.find_by_pet_id(fx.samantha_id).await.unwrap();
        assert_eq!(remaining.len(), 1);
    }
}
