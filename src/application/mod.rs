//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Handlers
//! validate before persisting, enforce the duplicate-pet-name policy, and
//! compose aggregate hydration out of the per-entity repositories.

pub mod handlers;

mod owner_loader;
mod pet_type_formatter;

pub use owner_loader::OwnerLoader;
pub use pet_type_formatter::PetTypeFormatter;
