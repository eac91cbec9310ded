//! AddPetHandler - Command handler for adding a pet to an owner.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::OwnerLoader;
use crate::domain::foundation::{DomainError, ErrorCode, OwnerId, PetTypeId};
use crate::domain::owner::{validate_pet, Pet};
use crate::ports::{OwnerRepository, PetRepository, PetTypeRepository};

/// Command to add a new pet to an owner.
///
/// `today` is supplied by the caller so the birth-date check is testable
/// and independent of the wall clock.
#[derive(Debug, Clone)]
pub struct AddPetCommand {
    pub owner_id: OwnerId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type_id: Option<PetTypeId>,
    pub today: NaiveDate,
}

/// Handler for adding pets.
///
/// Duplicate names are checked against the owner's persisted pets only;
/// the pet being added is by definition unpersisted and must not shadow
/// itself out of existence.
pub struct AddPetHandler {
    owners: Arc<dyn OwnerRepository>,
    pets: Arc<dyn PetRepository>,
    pet_types: Arc<dyn PetTypeRepository>,
    loader: OwnerLoader,
}

impl AddPetHandler {
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
    /// - `PetTypeNotFound` if the referenced pet type doesn't exist
    /// - `ValidationFailed` with every violated field collected, including
    ///   a `name` entry when the owner already has a pet with this name
    pub async fn handle(&self, cmd: AddPetCommand) -> Result<Pet, DomainError> {
        let owner = self
            .owners
            .find_by_id(cmd.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::OwnerNotFound, "Owner", cmd.owner_id))?;
        let owner = self.loader.load(owner).await?;

        let mut pet = Pet::new(cmd.name.clone());
        pet.set_birth_date(cmd.birth_date);
        if let Some(type_id) = cmd.pet_type_id {
            let pet_type = self.pet_types.find_by_id(type_id).await?.ok_or_else(|| {
                DomainError::not_found(ErrorCode::PetTypeNotFound, "PetType", type_id)
            })?;
            pet.set_type(pet_type);
        }

        let mut errors = validate_pet(&pet, cmd.today);
        if !cmd.name.trim().is_empty() && owner.pet_by_name(&cmd.name, true).is_some() {
            errors.add("name", "is already in use");
        }
        errors.into_result()?;

        pet.set_owner_id(Some(cmd.owner_id));
        let saved = self.pets.save(&pet).await?;
        tracing::info!(owner_id = %cmd.owner_id, pet_id = ?saved.id(), "pet added");
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

    struct Fixture {
        pets: Arc<InMemoryPetRepository>,
        owner_id: OwnerId,
        cat_id: PetTypeId,
        handler: AddPetHandler,
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

        let loader = OwnerLoader::new(pets.clone(), pet_types.clone(), visits);
        let handler = AddPetHandler::new(owners, pets.clone(), pet_types, loader);
        Fixture {
            pets,
            owner_id: owner.id().unwrap(),
            cat_id: cat.id().unwrap(),
            handler,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn command(fx: &Fixture, name: &str) -> AddPetCommand {
        AddPetCommand {
            owner_id: fx.owner_id,
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2012, 9, 4),
            pet_type_id: Some(fx.cat_id),
            today: today(),
        }
    }

    #[tokio::test]
    async fn pet_is_saved_with_owner_back_reference() {
        let fx = fixture().await;
        let saved = fx.handler.handle(command(&fx, "Samantha")).await.unwrap();
        assert!(saved.id().is_some());
        assert_eq!(saved.owner_id(), Some(fx.owner_id));
        assert_eq!(saved.type_id(), Some(fx.cat_id));
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let fx = fixture().await;
        fx.handler.handle(command(&fx, "Samantha")).await.unwrap();

        let err = fx.handler.handle(command(&fx, "samantha")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.contains_key("name"));

        let stored = fx.pets.find_by_owner_id(fx.owner_id).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn blank_name_reports_blankness_not_duplication() {
        let fx = fixture().await;
        let mut cmd = command(&fx, "  ");
        cmd.birth_date = None;
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.details.get("name").map(String::as_str), Some("must not be blank"));
    }

    #[tokio::test]
    async fn future_birth_date_is_rejected() {
        let fx = fixture().await;
        let mut cmd = command(&fx, "Samantha");
        cmd.birth_date = today().succ_opt();
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert!(err.details.contains_key("birthDate"));
    }

    #[tokio::test]
    async fn missing_type_is_rejected() {
        let fx = fixture().await;
        let mut cmd = command(&fx, "Samantha");
        cmd.pet_type_id = None;
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert!(err.details.contains_key("type"));
    }

    #[tokio::test]
    async fn unknown_type_is_not_found() {
        let fx = fixture().await;
        let mut cmd = command(&fx, "Samantha");
        cmd.pet_type_id = Some(PetTypeId::new(999));
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PetTypeNotFound);
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() {
        let fx = fixture().await;
        let mut cmd = command(&fx, "Samantha");
        cmd.owner_id = OwnerId::new(999);
        let err = fx.handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OwnerNotFound);
    }
}
