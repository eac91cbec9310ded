//! Medical reference data: conditions and medication records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::MedicationId;

/// Composite identity of a medical condition: condition code plus locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MedicalConditionId {
    code: String,
    locale: String,
}

impl MedicalConditionId {
    pub fn new(code: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            locale: locale.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl std::fmt::Display for MedicalConditionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.locale)
    }
}

/// A localized medical condition with its display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalCondition {
    id: MedicalConditionId,
    names: BTreeSet<String>,
}

impl MedicalCondition {
    pub fn new(id: MedicalConditionId) -> Self {
        Self {
            id,
            names: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &MedicalConditionId {
        &self.id
    }

    pub fn code(&self) -> &str {
        self.id.code()
    }

    pub fn locale(&self) -> &str {
        self.id.locale()
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Adds a display name; returns false if it was already present.
    pub fn add_name(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }
}

/// A medication record, UUID-keyed by storage.
///
/// Visits reference medicines by name inside [`crate::domain::owner::Prescription`];
/// this record is the identity the persisted schema's `medications` table
/// maps onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    id: Option<MedicationId>,
    name: String,
}

impl Medication {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn reconstitute(id: MedicationId, name: String) -> Self {
        Self {
            id: Some(id),
            name,
        }
    }

    pub fn id(&self) -> Option<&MedicationId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
