//! Declarative constraints enforced before any persistence attempt.
//!
//! Violations are collected, not short-circuited, so a form re-render can
//! show every message at once. "Today" is supplied by the caller so that the
//! future-date check happens at validation time, not at construction time.

use chrono::NaiveDate;

use crate::domain::foundation::ValidationErrors;

use super::{Owner, Pet, Visit};

/// Field constraints for an owner.
pub fn validate_owner(owner: &Owner) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.require_non_blank("firstName", owner.first_name());
    errors.require_non_blank("lastName", owner.last_name());
    errors.require_street_address("address", owner.address().street());
    errors.require_non_blank("city", owner.address().city());
    errors.require_telephone("telephone", owner.telephone());
    errors
}

/// Field constraints for a pet.
pub fn validate_pet(pet: &Pet, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.require_non_blank("name", pet.name());
    if pet.type_id().is_none() {
        errors.add("type", "is required");
    }
    errors.require_not_in_future("birthDate", pet.birth_date(), today);
    errors
}

/// Field constraints for a visit.
pub fn validate_visit(visit: &Visit) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.require_non_blank("description", visit.description());
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PetTypeId;
    use crate::domain::owner::{Address, PetType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn cat() -> PetType {
        PetType::reconstitute(PetTypeId::new(1), "cat".to_string(), 0)
    }

    #[test]
    fn complete_owner_passes() {
        let owner = Owner::new(
            "George",
            "Franklin",
            Address::new("110 W. Liberty St.", "Madison"),
            "6085551023",
            None,
        );
        assert!(validate_owner(&owner).is_empty());
    }

    #[test]
    fn owner_violations_are_all_reported() {
        let owner = Owner::new("", "", Address::new("Main Street", ""), "123", None);
        let errors = validate_owner(&owner);
        assert!(errors.has_field("firstName"));
        assert!(errors.has_field("lastName"));
        assert!(errors.has_field("address"));
        assert!(errors.has_field("city"));
        assert!(errors.has_field("telephone"));
    }

    #[test]
    fn pet_without_type_fails() {
        let pet = Pet::new("Leo");
        assert!(validate_pet(&pet, today()).has_field("type"));
    }

    #[test]
    fn pet_born_today_passes() {
        let mut pet = Pet::new("Leo");
        pet.set_type(cat());
        pet.set_birth_date(Some(today()));
        assert!(validate_pet(&pet, today()).is_empty());
    }

    #[test]
    fn pet_born_tomorrow_fails() {
        let mut pet = Pet::new("Leo");
        pet.set_type(cat());
        pet.set_birth_date(Some(today().succ_opt().unwrap()));
        assert!(validate_pet(&pet, today()).has_field("birthDate"));
    }

    #[test]
    fn blank_visit_description_fails() {
        let visit = Visit::new(today(), "  ");
        assert!(validate_visit(&visit).has_field("description"));
    }
}
