//! In-memory PetType repository with the optimistic-version check.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PetTypeId};
use crate::domain::owner::PetType;
use crate::ports::PetTypeRepository;

struct Inner {
    rows: HashMap<i64, PetType>,
    next_id: i64,
}

/// In-memory [`PetTypeRepository`].
///
/// Updates compare the supplied version against the stored one under the
/// write lock and increment it on success, so two editors racing on the
/// same read version cannot both win.
pub struct InMemoryPetTypeRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPetTypeRepository {
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
impl PetTypeRepository for InMemoryPetTypeRepository {
    async fn find_all_ordered_by_name(&self) -> Result<Vec<PetType>, DomainError> {
        let inner = self.inner.read().await;
        let mut types: Vec<PetType> = inner.rows.values().cloned().collect();
        types.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(types)
    }

    async fn find_by_id(&self, id: PetTypeId) -> Result<Option<PetType>, DomainError> {
        Ok(self.inner.read().await.rows.get(&id.value()).cloned())
    }

    async fn save(&self, pet_type: &PetType) -> Result<PetType, DomainError> {
        let mut inner = self.inner.write().await;
        match pet_type.id() {
            None => {
                let id = PetTypeId::new(inner.next_id);
                inner.next_id += 1;
                let stored = PetType::reconstitute(id, pet_type.name().to_string(), 0);
                inner.rows.insert(id.value(), stored.clone());
                Ok(stored)
            }
            Some(id) => {
                let current = inner
                    .rows
                    .get(&id.value())
                    .map(PetType::version)
                    .unwrap_or(0);
                if pet_type.version() != current {
                    return Err(DomainError::stale_version(
                        "PetType",
                        current,
                        pet_type.version(),
                    ));
                }
                let stored =
                    PetType::reconstitute(id, pet_type.name().to_string(), current + 1);
                inner.rows.insert(id.value(), stored.clone());
                Ok(stored)
            }
        }
    }
}
