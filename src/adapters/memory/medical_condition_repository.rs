//! In-memory MedicalCondition repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::medicine::{MedicalCondition, MedicalConditionId};
use crate::ports::MedicalConditionRepository;

/// In-memory [`MedicalConditionRepository`], keyed by the composite
/// `(code, locale)` identity.
#[derive(Default)]
pub struct InMemoryMedicalConditionRepository {
    rows: RwLock<HashMap<MedicalConditionId, MedicalCondition>>,
}

impl InMemoryMedicalConditionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicalConditionRepository for InMemoryMedicalConditionRepository {
    async fn find_by_id(
        &self,
        id: &MedicalConditionId,
    ) -> Result<Option<MedicalCondition>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn save(&self, condition: &MedicalCondition) -> Result<MedicalCondition, DomainError> {
        self.rows
            .write()
            .await
            .insert(condition.id().clone(), condition.clone());
        Ok(condition.clone())
    }
}
