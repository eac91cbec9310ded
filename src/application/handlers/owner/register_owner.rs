//! RegisterOwnerHandler - Command handler for creating new owners.

use std::sync::Arc;

use crate::domain::owner::{validate_owner, Address, Owner};
use crate::domain::foundation::DomainError;
use crate::ports::OwnerRepository;

/// Command to register a new owner.
#[derive(Debug, Clone)]
pub struct RegisterOwnerCommand {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub telephone: String,
    pub email: Option<String>,
}

/// Handler for registering owners.
pub struct RegisterOwnerHandler {
    owners: Arc<dyn OwnerRepository>,
}

impl RegisterOwnerHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self { owners }
    }

    /// Validates the form fields, then persists the owner.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` with every violated field collected
    pub async fn handle(&self, cmd: RegisterOwnerCommand) -> Result<Owner, DomainError> {
        let owner = Owner::new(
            cmd.first_name,
            cmd.last_name,
            Address::new(cmd.street, cmd.city),
            cmd.telephone,
            cmd.email,
        );
        validate_owner(&owner).into_result()?;

        let saved = self.owners.save(&owner).await?;
        tracing::info!(owner_id = ?saved.id(), "new owner registered");
        Ok(saved)
    }
}
