//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, pagination, errors)
//! - `owner` - Owner aggregate root with pets, visits, and pet types
//! - `vet` - Vet directory entities (vets, specialties, join records)
//! - `medicine` - Medical conditions and medication records

pub mod foundation;
pub mod medicine;
pub mod owner;
pub mod vet;
