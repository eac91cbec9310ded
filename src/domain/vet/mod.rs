//! Vet directory entities.
//!
//! Vets and specialties are read-mostly reference data, seeded once.
//! A cached Vet snapshot's specialty list is treated as immutable.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SpecialtyId, VetId};

/// A veterinary specialty such as "radiology" or "surgery".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    id: Option<SpecialtyId>,
    name: String,
}

impl Specialty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn reconstitute(id: SpecialtyId, name: String) -> Self {
        Self {
            id: Some(id),
            name,
        }
    }

    pub fn id(&self) -> Option<SpecialtyId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A veterinarian with an ordered list of specialties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    id: Option<VetId>,
    first_name: String,
    last_name: String,
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties: Vec::new(),
        }
    }

    pub fn reconstitute(id: VetId, first_name: String, last_name: String) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            specialties: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<VetId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }

    /// Attaches a specialty; duplicates by id are skipped.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        if specialty.id().is_some() && self.specialties.iter().any(|s| s.id() == specialty.id()) {
            return;
        }
        self.specialties.push(specialty);
    }
}

/// Join record linking a vet to a specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetSpecialty {
    vet_id: VetId,
    specialty_id: SpecialtyId,
}

impl VetSpecialty {
    pub fn new(vet_id: VetId, specialty_id: SpecialtyId) -> Self {
        Self {
            vet_id,
            specialty_id,
        }
    }

    pub fn vet_id(&self) -> VetId {
        self.vet_id
    }

    pub fn specialty_id(&self) -> SpecialtyId {
        self.specialty_id
    }
}
