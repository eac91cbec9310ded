//! In-memory adapters backed by `tokio::sync::RwLock`-guarded maps.
//!
//! Integer ids are assigned from a per-repository counter on first save.
//! These adapters back the test suites and any demo wiring; they mirror the
//! sort and scoping contracts the ports promise of a database.

mod medical_condition_repository;
mod medication_repository;
mod owner_repository;
mod pet_repository;
mod pet_type_repository;
mod vet_repository;
mod visit_repository;

pub use medical_condition_repository::InMemoryMedicalConditionRepository;
pub use medication_repository::InMemoryMedicationRepository;
pub use owner_repository::InMemoryOwnerRepository;
pub use pet_repository::InMemoryPetRepository;
pub use pet_type_repository::InMemoryPetTypeRepository;
pub use vet_repository::{
    InMemorySpecialtyRepository, InMemoryVetRepository, InMemoryVetSpecialtyRepository,
};
pub use visit_repository::InMemoryVisitRepository;
