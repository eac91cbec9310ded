//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, one file
//! per use case.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod vet;
pub mod visit;

pub use owner::{
    FindOwnersQuery, OwnerSearchOutcome, RegisterOwnerCommand, RegisterOwnerHandler,
    SearchOwnersHandler, ShowOwnerHandler, UpdateOwnerCommand, UpdateOwnerHandler,
};
pub use pet::{
    AddPetCommand, AddPetHandler, RemovePetCommand, RemovePetHandler, UpdatePetCommand,
    UpdatePetHandler,
};
pub use pet_type::{RenamePetTypeCommand, RenamePetTypeHandler};
pub use vet::VetDirectory;
pub use visit::{AddVisitCommand, AddVisitHandler, RemoveVisitCommand, RemoveVisitHandler};
