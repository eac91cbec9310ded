//! Visit entity and prescription value type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{PetId, VisitId};
use crate::domain::medicine::MedicalConditionId;

/// A medicine/notes pair attached to a visit.
///
/// Compared by content; duplicates collapse under set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prescription {
    medicine: String,
    notes: String,
}

impl Prescription {
    pub fn new(medicine: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            medicine: medicine.into(),
            notes: notes.into(),
        }
    }

    pub fn medicine(&self) -> &str {
        &self.medicine
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// A single visit of a pet to the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    id: Option<VisitId>,
    date: NaiveDate,
    description: String,
    pet_id: Option<PetId>,
    prescriptions: HashSet<Prescription>,
    condition: Option<MedicalConditionId>,
}

impl Visit {
    /// Creates a new, unpersisted visit.
    ///
    /// A freshly initialized visit form defaults `date` to today; that
    /// default is applied by the caller, which knows what "today" is.
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            description: description.into(),
            pet_id: None,
            prescriptions: HashSet::new(),
            condition: None,
        }
    }

    /// Reconstitutes a visit from persistence.
    pub fn reconstitute(
        id: VisitId,
        date: NaiveDate,
        description: String,
        pet_id: Option<PetId>,
        prescriptions: HashSet<Prescription>,
        condition: Option<MedicalConditionId>,
    ) -> Self {
        Self {
            id: Some(id),
            date,
            description,
            pet_id,
            prescriptions,
            condition,
        }
    }

    pub fn id(&self) -> Option<VisitId> {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pet_id(&self) -> Option<PetId> {
        self.pet_id
    }

    pub fn prescriptions(&self) -> &HashSet<Prescription> {
        &self.prescriptions
    }

    pub fn condition(&self) -> Option<&MedicalConditionId> {
        self.condition.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Adds a prescription; returns false if an equal one was present.
    pub fn add_prescription(&mut self, prescription: Prescription) -> bool {
        self.prescriptions.insert(prescription)
    }

    /// Replaces the prescription set wholesale.
    pub fn set_prescriptions(&mut self, prescriptions: HashSet<Prescription>) {
        self.prescriptions = prescriptions;
    }

    pub fn set_condition(&mut self, condition: Option<MedicalConditionId>) {
        self.condition = condition;
    }

    pub(crate) fn set_pet_id(&mut self, pet_id: Option<PetId>) {
        self.pet_id = pet_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn equal_prescriptions_collapse_to_one() {
        let mut visit = Visit::new(some_date(), "rabies shot");
        assert!(visit.add_prescription(Prescription::new("Aaa", "111")));
        assert!(!visit.add_prescription(Prescription::new("Aaa", "111")));
        assert_eq!(visit.prescriptions().len(), 1);
    }

    #[test]
    fn replacing_with_three_distinct_entries_yields_three() {
        let mut visit = Visit::new(some_date(), "checkup");
        visit.add_prescription(Prescription::new("Aaa", "111"));
        let replacement: HashSet<_> = [
            Prescription::new("Aaa", "111"),
            Prescription::new("Bbb", "222"),
            Prescription::new("Ccc", "333"),
        ]
        .into_iter()
        .collect();
        visit.set_prescriptions(replacement);
        assert_eq!(visit.prescriptions().len(), 3);
    }

    #[test]
    fn prescriptions_differing_only_in_notes_are_distinct() {
        let mut visit = Visit::new(some_date(), "checkup");
        visit.add_prescription(Prescription::new("Aaa", "111"));
        visit.add_prescription(Prescription::new("Aaa", "112"));
        assert_eq!(visit.prescriptions().len(), 2);
    }

    #[test]
    fn new_visit_has_no_id() {
        let visit = Visit::new(some_date(), "checkup");
        assert!(visit.is_new());
        assert!(visit.pet_id().is_none());
    }
}
