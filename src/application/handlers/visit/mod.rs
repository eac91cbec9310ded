//! Visit use cases.

mod add_visit;
mod remove_visit;

pub use add_visit::{AddVisitCommand, AddVisitHandler};
pub use remove_visit::{RemoveVisitCommand, RemoveVisitHandler};
