//! Medication repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MedicationId};
use crate::domain::medicine::Medication;

/// Repository port for Medication records.
#[async_trait]
pub trait MedicationRepository: Send + Sync {
    /// Save a medication, assigning a UUID identity on first save.
    async fn save(&self, medication: &Medication) -> Result<Medication, DomainError>;

    /// Find a medication by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError>;
}
