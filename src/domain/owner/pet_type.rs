//! Pet type reference data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PetTypeId;

/// Shared, rarely-written reference data naming a kind of pet.
///
/// Carries an optimistic-concurrency `version` counter: every successful
/// update must supply the version it read, and storage compares and
/// increments it atomically. A save based on a stale version fails with
/// `ErrorCode::StaleVersion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetType {
    id: Option<PetTypeId>,
    name: String,
    version: u32,
}

impl PetType {
    /// Creates a new, unpersisted pet type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            version: 0,
        }
    }

    /// Reconstitutes a pet type from persistence.
    pub fn reconstitute(id: PetTypeId, name: String, version: u32) -> Self {
        Self {
            id: Some(id),
            name,
            version,
        }
    }

    pub fn id(&self) -> Option<PetTypeId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version counter this instance was read at.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Changes the display name. The version is only advanced by storage on
    /// a successful save.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
