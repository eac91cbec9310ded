//! In-memory Medication repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MedicationId};
use crate::domain::medicine::Medication;
use crate::ports::MedicationRepository;

/// In-memory [`MedicationRepository`]. Identities are random UUIDs
/// assigned on first save.
#[derive(Default)]
pub struct InMemoryMedicationRepository {
    rows: RwLock<HashMap<MedicationId, Medication>>,
}

impl InMemoryMedicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicationRepository for InMemoryMedicationRepository {
    async fn save(&self, medication: &Medication) -> Result<Medication, DomainError> {
        let id = medication.id().copied().unwrap_or_default();
        let stored = Medication::reconstitute(id, medication.name().to_string());
        self.rows.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}
