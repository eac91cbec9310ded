//! In-memory Visit repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PetId, VisitId};
use crate::domain::owner::Visit;
use crate::ports::VisitRepository;

struct Inner {
    rows: HashMap<i64, Visit>,
    next_id: i64,
}

/// In-memory [`VisitRepository`]. Visits come back in id order.
pub struct InMemoryVisitRepository {
    inner: RwLock<Inner>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn save(&self, visit: &Visit) -> Result<Visit, DomainError> {
        let mut inner = self.inner.write().await;
        let id = match visit.id() {
            Some(id) => id,
            None => {
                let id = VisitId::new(inner.next_id);
                inner.next_id += 1;
                id
            }
        };
        let stored = Visit::reconstitute(
            id,
            visit.date(),
            visit.description().to_string(),
            visit.pet_id(),
            visit.prescriptions().clone(),
            visit.condition().cloned(),
        );
        inner.rows.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn find_by_pet_id(&self, pet_id: PetId) -> Result<Vec<Visit>, DomainError> {
        let inner = self.inner.read().await;
        let mut visits: Vec<Visit> = inner
            .rows
            .values()
            .filter(|visit| visit.pet_id() == Some(pet_id))
            .cloned()
            .collect();
        visits.sort_by_key(Visit::id);
        Ok(visits)
    }

    async fn delete(&self, id: VisitId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if inner.rows.remove(&id.value()).is_none() {
            return Err(DomainError::not_found(ErrorCode::VisitNotFound, "Visit", id));
        }
        Ok(())
    }
}
