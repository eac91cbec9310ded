//! PetClinic Core - Veterinary Clinic Domain Model and Services
//!
//! This crate implements the owner/pet/visit domain of a veterinary clinic:
//! aggregate invariants, paginated owner search, the cached vet directory,
//! and optimistic concurrency for shared reference data. Persistence and the
//! web boundary are collaborators reached through ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
