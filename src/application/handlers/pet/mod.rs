//! Pet use cases.

mod add_pet;
mod remove_pet;
mod update_pet;

pub use add_pet::{AddPetCommand, AddPetHandler};
pub use remove_pet::{RemovePetCommand, RemovePetHandler};
pub use update_pet::{UpdatePetCommand, UpdatePetHandler};
