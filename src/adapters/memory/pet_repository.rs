//! In-memory Pet repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OwnerId, PetId};
use crate::domain::owner::Pet;
use crate::ports::PetRepository;

struct Inner {
    rows: HashMap<i64, Pet>,
    next_id: i64,
}

/// In-memory [`PetRepository`].
///
/// Pets are stored without hydrated type or visits; `find_by_owner_id`
/// returns them in id order, which is insertion order.
pub struct InMemoryPetRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

fn strip(pet: &Pet, id: PetId) -> Pet {
    Pet::reconstitute(
        id,
        pet.name().to_string(),
        pet.birth_date(),
        pet.type_id(),
        pet.owner_id(),
    )
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError> {
        let mut inner = self.inner.write().await;
        let id = match pet.id() {
            Some(id) => id,
            None => {
                let id = PetId::new(inner.next_id);
                inner.next_id += 1;
                id
            }
        };
        let stored = strip(pet, id);
        inner.rows.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn find_by_owner_id(&self, owner_id: OwnerId) -> Result<Vec<Pet>, DomainError> {
        let inner = self.inner.read().await;
        let mut pets: Vec<Pet> = inner
            .rows
            .values()
            .filter(|pet| pet.owner_id() == Some(owner_id))
            .cloned()
            .collect();
        pets.sort_by_key(Pet::id);
        Ok(pets)
    }

    async fn find_by_id_and_owner_id(
        &self,
        id: PetId,
        owner_id: OwnerId,
    ) -> Result<Option<Pet>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .get(&id.value())
            .filter(|pet| pet.owner_id() == Some(owner_id))
            .cloned())
    }

    async fn delete(&self, id: PetId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if inner.rows.remove(&id.value()).is_none() {
            return Err(DomainError::not_found(ErrorCode::PetNotFound, "Pet", id));
        }
        Ok(())
    }
}
