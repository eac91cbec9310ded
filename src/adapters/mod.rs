//! Adapters implementing the repository ports.

pub mod memory;
