//! Aggregate hydration: attaches pets, pet types, and visits to an owner.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::owner::Owner;
use crate::ports::{PetRepository, PetTypeRepository, VisitRepository};

/// Composes a full Owner aggregate out of the per-entity repositories.
///
/// Owners come out of storage without pets; pets without hydrated type or
/// visits. Loading walks each pet, attaches its type and visits, and adds
/// it to the owner, preserving storage order.
#[derive(Clone)]
pub struct OwnerLoader {
    pets: Arc<dyn PetRepository>,
    pet_types: Arc<dyn PetTypeRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl OwnerLoader {
    pub fn new(
        pets: Arc<dyn PetRepository>,
        pet_types: Arc<dyn PetTypeRepository>,
        visits: Arc<dyn VisitRepository>,
    ) -> Self {
        Self {
            pets,
            pet_types,
            visits,
        }
    }

    /// Attaches pets (with types and visits) to the owner.
    ///
    /// An unpersisted owner has nothing to attach and is returned as-is.
    pub async fn load(&self, mut owner: Owner) -> Result<Owner, DomainError> {
        let Some(owner_id) = owner.id() else {
            return Ok(owner);
        };

        let pets = self.pets.find_by_owner_id(owner_id).await?;
        for mut pet in pets {
            if pet.pet_type().is_none() {
                if let Some(type_id) = pet.type_id() {
                    if let Some(pet_type) = self.pet_types.find_by_id(type_id).await? {
                        pet.set_type(pet_type);
                    }
                }
            }
            if let Some(pet_id) = pet.id() {
                for visit in self.visits.find_by_pet_id(pet_id).await? {
                    pet.add_visit(visit);
                }
            }
            owner.add_pet(pet);
        }
        Ok(owner)
    }
}
