//! Owner use cases.

mod register_owner;
mod search_owners;
mod show_owner;
mod update_owner;

pub use register_owner::{RegisterOwnerCommand, RegisterOwnerHandler};
pub use search_owners::{FindOwnersQuery, OwnerSearchOutcome, SearchOwnersHandler};
pub use show_owner::ShowOwnerHandler;
pub use update_owner::{UpdateOwnerCommand, UpdateOwnerHandler};
