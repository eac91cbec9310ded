//! Ports - Interfaces for the storage collaborator.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports; the core
//! performs no I/O of its own.

mod medical_condition_repository;
mod medication_repository;
mod owner_repository;
mod pet_repository;
mod pet_type_repository;
mod vet_repository;
mod visit_repository;

pub use medical_condition_repository::MedicalConditionRepository;
pub use medication_repository::MedicationRepository;
pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;
pub use pet_type_repository::PetTypeRepository;
pub use vet_repository::{SpecialtyRepository, VetRepository, VetSpecialtyRepository};
pub use visit_repository::VisitRepository;
