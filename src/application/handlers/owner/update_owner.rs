//! UpdateOwnerHandler - Command handler for editing owner details.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OwnerId};
use crate::domain::owner::{validate_owner, Address, Owner};
use crate::ports::OwnerRepository;

/// Command to update an existing owner's details.
///
/// `form_id` is the id echoed back by the edit form; it must agree with
/// the addressed `owner_id`, which guards against a form posted to the
/// wrong owner's URL.
#[derive(Debug, Clone)]
pub struct UpdateOwnerCommand {
    pub owner_id: OwnerId,
    pub form_id: Option<OwnerId>,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub telephone: String,
    pub email: Option<String>,
}

/// Handler for updating owner details.
pub struct UpdateOwnerHandler {
    owners: Arc<dyn OwnerRepository>,
}

impl UpdateOwnerHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self { owners }
    }

    /// # Errors
    ///
    /// - `OwnerIdMismatch` if the form id disagrees with the addressed id
    /// - `OwnerNotFound` if the owner doesn't exist
    /// - `ValidationFailed` with every violated field collected
    pub async fn handle(&self, cmd: UpdateOwnerCommand) -> Result<Owner, DomainError> {
        if let Some(form_id) = cmd.form_id {
            if form_id != cmd.owner_id {
                return Err(DomainError::new(
                    ErrorCode::OwnerIdMismatch,
                    "The owner ID in the form does not match the URL",
                )
                .with_detail("addressed", cmd.owner_id.to_string())
                .with_detail("form", form_id.to_string()));
            }
        }

        let mut owner = self
            .owners
            .find_by_id(cmd.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::OwnerNotFound, "Owner", cmd.owner_id))?;

        owner.update_details(
            cmd.first_name,
            cmd.last_name,
            Address::new(cmd.street, cmd.city),
            cmd.telephone,
            cmd.email,
        );
        validate_owner(&owner).into_result()?;

        let saved = self.owners.save(&owner).await?;
        tracing::info!(owner_id = %cmd.owner_id, "owner details updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOwnerRepository;

    async fn seeded_repo() -> (Arc<InMemoryOwnerRepository>, OwnerId) {
        let repo = Arc::new(InMemoryOwnerRepository::new());
        let owner = Owner::new(
            "George",
            "Franklin",
            Address::new("110 W. Liberty St.", "Madison"),
            "6085551023",
            None,
        );
        let saved = repo.save(&owner).await.unwrap();
        (repo, saved.id().unwrap())
    }

    fn command(owner_id: OwnerId) -> UpdateOwnerCommand {
        UpdateOwnerCommand {
            owner_id,
            form_id: Some(owner_id),
            first_name: "George".to_string(),
            last_name: "Franklin".to_string(),
            street: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085559435".to_string(),
            email: None,
        }
    }

    #[tokio::test]
    async fn update_persists_new_details() {
        let (repo, owner_id) = seeded_repo().await;
        let handler = UpdateOwnerHandler::new(repo.clone());

        handler.handle(command(owner_id)).await.unwrap();

        let reloaded = repo.find_by_id(owner_id).await.unwrap().unwrap();
        assert_eq!(reloaded.telephone(), "6085559435");
    }

    #[tokio::test]
    async fn mismatched_form_id_is_rejected() {
        let (repo, owner_id) = seeded_repo().await;
        let handler = UpdateOwnerHandler::new(repo);

        let mut cmd = command(owner_id);
        cmd.form_id = Some(OwnerId::new(999));

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OwnerIdMismatch);
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() {
        let repo = Arc::new(InMemoryOwnerRepository::new());
        let handler = UpdateOwnerHandler::new(repo);

        let err = handler.handle(command(OwnerId::new(42))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OwnerNotFound);
    }

    #[tokio::test]
    async fn invalid_details_are_rejected() {
        let (repo, owner_id) = seeded_repo().await;
        let handler = UpdateOwnerHandler::new(repo.clone());

        let mut cmd = command(owner_id);
        cmd.telephone = "not-a-phone".to_string();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let reloaded = repo.find_by_id(owner_id).await.unwrap().unwrap();
        assert_eq!(reloaded.telephone(), "6085551023");
    }
}
