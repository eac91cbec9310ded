//! Vet directory use cases.

mod vet_directory;

pub use vet_directory::VetDirectory;
