//! Pet type repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PetTypeId};
use crate::domain::owner::PetType;

/// Repository port for PetType reference data.
///
/// Implementations must enforce the optimistic-version check on `save`:
/// compare the supplied version against the stored one and increment it
/// atomically, failing the update when the supplied version is stale.
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    /// All pet types, ordered by name.
    async fn find_all_ordered_by_name(&self) -> Result<Vec<PetType>, DomainError>;

    /// Find a pet type by id. Returns `None` if not found.
    async fn find_by_id(&self, id: PetTypeId) -> Result<Option<PetType>, DomainError>;

    /// Save a pet type, assigning an id on first save and performing the
    /// compare-and-increment on the version counter for updates.
    ///
    /// # Errors
    ///
    /// - `StaleVersion` if the supplied version does not match the stored one
    async fn save(&self, pet_type: &PetType) -> Result<PetType, DomainError>;
}
