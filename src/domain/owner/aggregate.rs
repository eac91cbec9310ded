//! Owner aggregate root.
//!
//! # Ownership
//!
//! Owners own their pets and, through them, visits. All mutations to pets
//! flow through the owner. Duplicate-name rejection is orchestrated by the
//! calling handler using `pet_by_name`; the aggregate offers the query
//! primitives, not the policy.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OwnerId, PetId, Timestamp};

use super::Pet;

/// Postal address of an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "address")]
    street: String,
    city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Owner aggregate - a pet owner and their ordered pet collection.
///
/// # Invariants
///
/// - pet collection order is insertion order and survives a
///   load-mutate-save round trip
/// - no two persisted pets of one owner share a name (enforced by the
///   add/update pet handlers before persistence)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    id: Option<OwnerId>,
    first_name: String,
    last_name: String,
    #[serde(flatten)]
    address: Address,
    telephone: String,
    email: Option<String>,
    pets: Vec<Pet>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Owner {
    /// Creates a new, unpersisted owner.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: Address,
        telephone: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address,
            telephone: telephone.into(),
            email,
            pets: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes an owner from persistence, without pets attached.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OwnerId,
        first_name: String,
        last_name: String,
        address: Address,
        telephone: String,
        email: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            address,
            telephone,
            email,
            pets: Vec::new(),
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> Option<OwnerId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Pets in insertion order, which is also display order.
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Updates the owner's contact details.
    pub fn update_details(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: Address,
        telephone: impl Into<String>,
        email: Option<String>,
    ) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.address = address;
        self.telephone = telephone.into();
        self.email = email;
        self.updated_at = Timestamp::now();
    }

    /// Appends a pet to the collection. If the pet has not been persisted
    /// yet, its back-reference is set to this owner's id.
    pub fn add_pet(&mut self, mut pet: Pet) {
        if pet.is_new() {
            pet.set_owner_id(self.id);
        }
        self.pets.push(pet);
    }

    /// Finds a pet by name, matching case-insensitively.
    ///
    /// With `ignore_new = true` pets that have not been persisted yet are
    /// skipped, so the search covers existing pets only; with
    /// `ignore_new = false` unpersisted pets are included.
    pub fn pet_by_name(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        self.pets.iter().find(|pet| {
            if ignore_new && pet.is_new() {
                return false;
            }
            pet.name().eq_ignore_ascii_case(name)
        })
    }

    /// Finds a pet by identity.
    pub fn pet_by_id(&self, pet_id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id() == Some(pet_id))
    }

    /// Removes a pet by identity, returning it if present.
    pub fn remove_pet(&mut self, pet_id: PetId) -> Option<Pet> {
        let index = self.pets.iter().position(|pet| pet.id() == Some(pet_id))?;
        Some(self.pets.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PetId;

    fn persisted_owner() -> Owner {
        Owner::reconstitute(
            OwnerId::new(1),
            "George".to_string(),
            "Franklin".to_string(),
            Address::new("110 W. Liberty St.", "Madison"),
            "6085551023".to_string(),
            None,
            Timestamp::now(),
            Timestamp::now(),
        )
    }

    fn persisted_pet(id: i64, name: &str) -> Pet {
        Pet::reconstitute(PetId::new(id), name.to_string(), None, None, Some(OwnerId::new(1)))
    }

    #[test]
    fn add_pet_sets_back_reference_on_new_pets() {
        let mut owner = persisted_owner();
        owner.add_pet(Pet::new("Leo"));
        assert_eq!(owner.pets()[0].owner_id(), Some(OwnerId::new(1)));
    }

    #[test]
    fn add_pet_leaves_persisted_back_reference_alone() {
        let mut owner = persisted_owner();
        owner.add_pet(persisted_pet(5, "Leo"));
        assert_eq!(owner.pets()[0].owner_id(), Some(OwnerId::new(1)));
    }

    #[test]
    fn pet_by_name_matches_case_insensitively() {
        let mut owner = persisted_owner();
        owner.add_pet(persisted_pet(5, "Leo"));
        assert!(owner.pet_by_name("leo", false).is_some());
        assert!(owner.pet_by_name("LEO", false).is_some());
        assert!(owner.pet_by_name("Max", false).is_none());
    }

    #[test]
    fn pet_by_name_ignoring_new_skips_unpersisted_pets() {
        let mut owner = persisted_owner();
        owner.add_pet(Pet::new("Leo"));
        assert!(owner.pet_by_name("Leo", true).is_none());
        assert!(owner.pet_by_name("Leo", false).is_some());
    }

    #[test]
    fn pet_by_id_finds_persisted_pet() {
        let mut owner = persisted_owner();
        owner.add_pet(persisted_pet(5, "Leo"));
        assert_eq!(owner.pet_by_id(PetId::new(5)).unwrap().name(), "Leo");
        assert!(owner.pet_by_id(PetId::new(6)).is_none());
    }

    #[test]
    fn pets_keep_insertion_order() {
        let mut owner = persisted_owner();
        owner.add_pet(persisted_pet(1, "Leo"));
        owner.add_pet(persisted_pet(2, "Basil"));
        owner.add_pet(persisted_pet(3, "Rosy"));
        let names: Vec<_> = owner.pets().iter().map(Pet::name).collect();
        assert_eq!(names, ["Leo", "Basil", "Rosy"]);
    }

    #[test]
    fn remove_pet_returns_the_removed_pet() {
        let mut owner = persisted_owner();
        owner.add_pet(persisted_pet(1, "Leo"));
        owner.add_pet(persisted_pet(2, "Basil"));
        let removed = owner.remove_pet(PetId::new(1)).unwrap();
        assert_eq!(removed.name(), "Leo");
        assert_eq!(owner.pets().len(), 1);
    }

    #[test]
    fn update_details_touches_updated_at() {
        let mut owner = persisted_owner();
        let before = *owner.updated_at();
        owner.update_details(
            "George",
            "Franklin",
            Address::new("110 W. Liberty St.", "Madison"),
            "6085551023",
            Some("george@petclinic.example".to_string()),
        );
        assert!(!owner.updated_at().is_before(&before));
        assert_eq!(owner.email(), Some("george@petclinic.example"));
    }
}
