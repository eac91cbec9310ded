//! ShowOwnerHandler - Query handler for a single hydrated owner.

use std::sync::Arc;

use crate::application::OwnerLoader;
use crate::domain::foundation::{DomainError, ErrorCode, OwnerId};
use crate::domain::owner::Owner;
use crate::ports::OwnerRepository;

/// Handler loading one owner with pets, pet types, and visits attached.
pub struct ShowOwnerHandler {
    owners: Arc<dyn OwnerRepository>,
    loader: OwnerLoader,
}

impl ShowOwnerHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>, loader: OwnerLoader) -> Self {
        Self { owners, loader }
    }

    /// # Errors
    ///
    /// - `OwnerNotFound` if the owner doesn't exist
    pub async fn handle(&self, owner_id: OwnerId) -> Result<Owner, DomainError> {
        let owner = self
            .owners
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::OwnerNotFound, "Owner", owner_id))?;
        self.loader.load(owner).await
    }
}
