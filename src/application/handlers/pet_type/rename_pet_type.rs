//! RenamePetTypeHandler - Command handler for renaming shared reference data.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PetTypeId, ValidationErrors};
use crate::domain::owner::PetType;
use crate::ports::PetTypeRepository;

/// Command to rename a pet type.
///
/// `version` is the optimistic-concurrency counter the editor read the
/// type at. Storage rejects the save if another editor saved in between.
#[derive(Debug, Clone)]
pub struct RenamePetTypeCommand {
    pub pet_type_id: PetTypeId,
    pub name: String,
    pub version: u32,
}

/// Handler for renaming pet types.
pub struct RenamePetTypeHandler {
    pet_types: Arc<dyn PetTypeRepository>,
}

impl RenamePetTypeHandler {
    pub fn new(pet_types: Arc<dyn PetTypeRepository>) -> Self {
        Self { pet_types }
    }

    /// # Errors
    ///
    /// - `PetTypeNotFound` if the pet type doesn't exist
    /// - `ValidationFailed` if the new name is blank
    /// - `StaleVersion` if another edit landed after this one was read
    pub async fn handle(&self, cmd: RenamePetTypeCommand) -> Result<PetType, DomainError> {
        let existing = self
            .pet_types
            .find_by_id(cmd.pet_type_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::PetTypeNotFound, "PetType", cmd.pet_type_id)
            })?;

        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &cmd.name);
        errors.into_result()?;

        let mut pet_type = PetType::reconstitute(cmd.pet_type_id, existing.name().to_string(), cmd.version);
        pet_type.rename(cmd.name);

        let saved = self.pet_types.save(&pet_type).await?;
        tracing::info!(
            pet_type_id = %cmd.pet_type_id,
            name = saved.name(),
            version = saved.version(),
            "pet type renamed"
        );
        Ok(saved)
    }
}
