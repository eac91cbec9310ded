//! Name-to-PetType resolution for form round-tripping.

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::owner::PetType;
use crate::ports::PetTypeRepository;

/// Closed name→PetType mapping, populated once at startup.
///
/// The map is fully built before the formatter value exists, so concurrent
/// readers (behind an `Arc`) never observe a partially-built structure.
///
/// Known limitation: the mapping is not refreshed when a pet type is
/// renamed; a process restart picks up the change.
pub struct PetTypeFormatter {
    cache: HashMap<String, PetType>,
}

impl PetTypeFormatter {
    /// Loads all pet types, ordered by name, into the cache.
    pub async fn initialize(types: &dyn PetTypeRepository) -> Result<Self, DomainError> {
        let mut cache = HashMap::new();
        for pet_type in types.find_all_ordered_by_name().await? {
            cache.insert(pet_type.name().to_string(), pet_type);
        }
        tracing::debug!(types = cache.len(), "pet type cache populated");
        Ok(Self { cache })
    }

    /// Renders a pet type as its form value.
    pub fn print<'a>(&self, pet_type: &'a PetType) -> &'a str {
        pet_type.name()
    }

    /// Resolves a form value to its pet type by exact name match.
    ///
    /// # Errors
    ///
    /// - `PetTypeNotFound` if no cached type carries that name
    pub fn parse(&self, text: &str) -> Result<&PetType, DomainError> {
        self.cache
            .get(text)
            .ok_or_else(|| DomainError::new(ErrorCode::PetTypeNotFound, format!("type not found: {}", text)))
    }

    /// Number of cached types.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
