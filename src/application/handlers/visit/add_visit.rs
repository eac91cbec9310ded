//! AddVisitHandler - Command handler for recording a clinic visit.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, OwnerId, PetId};
use crate::domain::medicine::MedicalConditionId;
use crate::domain::owner::{validate_visit, Prescription, Visit};
use crate::ports::{MedicalConditionRepository, PetRepository, VisitRepository};

/// Command to record a visit for a pet.
///
/// A missing `date` means the form was submitted with its default, which
/// is the day of submission; `today` supplies it.
#[derive(Debug, Clone)]
pub struct AddVisitCommand {
    pub owner_id: OwnerId,
    pub pet_id: PetId,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub prescriptions: Vec<Prescription>,
    pub condition: Option<MedicalConditionId>,
    pub today: NaiveDate,
}

/// Handler for recording visits.
pub struct AddVisitHandler {
    pets: Arc<dyn PetRepository>,
    visits: Arc<dyn VisitRepository>,
    conditions: Arc<dyn MedicalConditionRepository>,
}

impl AddVisitHandler {
    pub fn new(
        pets: Arc<dyn PetRepository>,
        visits: Arc<dyn VisitRepository>,
        conditions: Arc<dyn MedicalConditionRepository>,
    ) -> Self {
        Self {
            pets,
            visits,
            conditions,
        }
    }

    /// # Errors
    ///
    /// - `PetNotFound` if the pet doesn't exist or belongs to another owner
    /// - `ConditionNotFound` if the diagnosed condition is not on record
    /// - `ValidationFailed` with every violated field collected
    pub async fn handle(&self, cmd: AddVisitCommand) -> Result<Visit, DomainError> {
        let pet = self
            .pets
            .find_by_id_and_owner_id(cmd.pet_id, cmd.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::PetNotFound, "Pet", cmd.pet_id))?;

        let mut visit = Visit::new(cmd.date.unwrap_or(cmd.today), cmd.description);
        visit.set_prescriptions(cmd.prescriptions.into_iter().collect::<HashSet<_>>());

        if let Some(condition_id) = cmd.condition {
            if self.conditions.find_by_id(&condition_id).await?.is_none() {
                return Err(DomainError::new(
                    ErrorCode::ConditionNotFound,
                    format!("MedicalCondition not found: {}", condition_id),
                ));
            }
            visit.set_condition(Some(condition_id));
        }

        validate_visit(&visit).into_result()?;

        visit.set_pet_id(pet.id());
        let saved = self.visits.save(&visit).await?;
        tracing::info!(
            owner_id = %cmd.owner_id,
            pet_id = %cmd.pet_id,
            visit_id = ?saved.id(),
            "visit recorded"
        );
        Ok(saved)
    }
}
