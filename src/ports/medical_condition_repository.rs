//! Medical condition repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::medicine::{MedicalCondition, MedicalConditionId};

/// Repository port for MedicalCondition reference data, looked up by its
/// composite `(code, locale)` key.
#[async_trait]
pub trait MedicalConditionRepository: Send + Sync {
    /// Find a condition by its composite key. Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &MedicalConditionId,
    ) -> Result<Option<MedicalCondition>, DomainError>;

    /// Save a condition (upsert by composite key).
    async fn save(&self, condition: &MedicalCondition) -> Result<MedicalCondition, DomainError>;
}
