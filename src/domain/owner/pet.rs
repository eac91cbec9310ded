//! Pet entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OwnerId, PetId, PetTypeId, VisitId};

use super::{PetType, Visit};

/// A pet belonging to an owner.
///
/// The `owner_id` is a back-reference, not an ownership pointer: pets are
/// created and removed through their [`super::Owner`]. Visits are kept in
/// insertion order, which is also display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    id: Option<PetId>,
    name: String,
    birth_date: Option<NaiveDate>,
    type_id: Option<PetTypeId>,
    /// Hydrated pet type, attached when the aggregate is loaded.
    #[serde(rename = "type")]
    pet_type: Option<PetType>,
    owner_id: Option<OwnerId>,
    visits: Vec<Visit>,
}

impl Pet {
    /// Creates a new, unpersisted pet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date: None,
            type_id: None,
            pet_type: None,
            owner_id: None,
            visits: Vec::new(),
        }
    }

    /// Reconstitutes a pet from persistence, without hydrated type or visits.
    pub fn reconstitute(
        id: PetId,
        name: String,
        birth_date: Option<NaiveDate>,
        type_id: Option<PetTypeId>,
        owner_id: Option<OwnerId>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            birth_date,
            type_id,
            pet_type: None,
            owner_id,
            visits: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<PetId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn type_id(&self) -> Option<PetTypeId> {
        self.type_id.or_else(|| self.pet_type.as_ref().and_then(PetType::id))
    }

    pub fn pet_type(&self) -> Option<&PetType> {
        self.pet_type.as_ref()
    }

    pub fn owner_id(&self) -> Option<OwnerId> {
        self.owner_id
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// A pet is new until its first successful save assigns an id.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.birth_date = birth_date;
    }

    /// Attaches the pet type, keeping the reference id in sync.
    pub fn set_type(&mut self, pet_type: PetType) {
        self.type_id = pet_type.id();
        self.pet_type = Some(pet_type);
    }

    pub(crate) fn set_owner_id(&mut self, owner_id: Option<OwnerId>) {
        self.owner_id = owner_id;
    }

    /// Appends a visit, setting its back-reference when the visit carries
    /// none yet.
    pub fn add_visit(&mut self, mut visit: Visit) {
        if visit.pet_id().is_none() {
            visit.set_pet_id(self.id);
        }
        self.visits.push(visit);
    }

    /// Removes a visit by id, returning it if present.
    pub fn remove_visit(&mut self, visit_id: VisitId) -> Option<Visit> {
        let index = self.visits.iter().position(|v| v.id() == Some(visit_id))?;
        Some(self.visits.remove(index))
    }
}
