//! Strongly-typed identifier value objects.
//!
//! Entity identifiers are assigned by the storage collaborator on first save,
//! so entities carry `Option<...Id>` until persisted. The identifiers here are
//! the assigned values and are always valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i64);

/// Unique identifier for a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(i64);

/// Unique identifier for a pet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetTypeId(i64);

/// Unique identifier for a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(i64);

/// Unique identifier for a vet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VetId(i64);

/// Unique identifier for a specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialtyId(i64);

macro_rules! integer_id {
    ($name:ident) => {
        impl $name {
            /// Creates an identifier from a storage-assigned value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the inner value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

integer_id!(OwnerId);
integer_id!(PetId);
integer_id!(PetTypeId);
integer_id!(VisitId);
integer_id!(VetId);
integer_id!(SpecialtyId);

/// Unique identifier for a medication record (UUID-keyed in storage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicationId(Uuid);

impl MedicationId {
    /// Creates a new random MedicationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a MedicationId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MedicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MedicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MedicationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_round_trips_through_display() {
        let id = OwnerId::new(42);
        assert_eq!(id.to_string(), "42");
        let parsed: OwnerId = "42".parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn owner_id_serializes_transparently() {
        let id = OwnerId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn pet_ids_order_by_value() {
        assert!(PetId::new(1) < PetId::new(2));
    }

    #[test]
    fn medication_id_generates_unique_values() {
        let id1 = MedicationId::new();
        let id2 = MedicationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn medication_id_parses_from_valid_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: MedicationId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }
}
