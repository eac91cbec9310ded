//! Vet directory repository ports.
//!
//! Vets, specialties, and their join records are fetched separately; the
//! vet directory service attaches specialties in a single batch per call.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PageRequest, VetId};
use crate::domain::vet::{Specialty, Vet, VetSpecialty};

/// Repository port for Vet records.
///
/// Read-only by contract: vets are seeded reference data, immutable for
/// the lifetime of a cached snapshot.
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// All vets, ordered by id.
    async fn find_all(&self) -> Result<Vec<Vet>, DomainError>;

    /// A page of vets, ordered by id.
    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Vet>, DomainError>;

    /// Total number of vets.
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository port for Specialty records.
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    /// All specialties.
    async fn find_all(&self) -> Result<Vec<Specialty>, DomainError>;
}

/// Repository port for the vet/specialty join table.
#[async_trait]
pub trait VetSpecialtyRepository: Send + Sync {
    /// All join records for one vet.
    async fn find_by_vet_id(&self, vet_id: VetId) -> Result<Vec<VetSpecialty>, DomainError>;
}
