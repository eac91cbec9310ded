//! Owner repository port.
//!
//! # Design
//!
//! The last-name-prefix search is deliberately split in two: an id-only
//! projection and a full fetch. The search handler gates the expensive
//! query on the cheap one, so implementations must keep the id projection
//! free of pet/visit joins.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId, PageRequest};
use crate::domain::owner::Owner;

/// Repository port for Owner persistence.
///
/// Owners are stored without their pet collection; hydration is composed
/// from the pet and visit repositories by the application layer.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Save a new or updated owner, assigning an id on first save.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, owner: &Owner) -> Result<Owner, DomainError>;

    /// Find an owner by id. Returns `None` if not found.
    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, DomainError>;

    /// Check if an owner exists.
    async fn exists(&self, id: OwnerId) -> Result<bool, DomainError>;

    /// Id-only projection of owners whose last name starts with `prefix`,
    /// sorted by last name then id ascending. An empty prefix matches all.
    async fn find_ids_by_last_name_prefix(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Vec<OwnerId>, DomainError>;

    /// Full owners whose last name starts with `prefix`, same sort and
    /// paging as the id projection.
    async fn find_by_last_name_prefix(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Vec<Owner>, DomainError>;

    /// Number of owners whose last name starts with `prefix`.
    async fn count_by_last_name_prefix(&self, prefix: &str) -> Result<u64, DomainError>;
}
