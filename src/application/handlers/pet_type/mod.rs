//! Pet type use cases.

mod rename_pet_type;

pub use rename_pet_type::{RenamePetTypeCommand, RenamePetTypeHandler};
