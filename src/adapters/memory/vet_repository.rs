//! In-memory vet directory repositories.
//!
//! The vet-side ports are read-only; these adapters grow `seed`/`link`
//! helpers for populating the reference data in tests and demos.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PageRequest, VetId};
use crate::domain::vet::{Specialty, Vet, VetSpecialty};
use crate::ports::{SpecialtyRepository, VetRepository, VetSpecialtyRepository};

/// In-memory [`VetRepository`], ordered by id.
#[derive(Default)]
pub struct InMemoryVetRepository {
    rows: RwLock<Vec<Vet>>,
}

impl InMemoryVetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vet to the roster.
    pub async fn seed(&self, vet: Vet) {
        let mut rows = self.rows.write().await;
        rows.push(vet);
        rows.sort_by_key(Vet::id);
    }
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, DomainError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Vet>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .skip(page.offset())
            .take(page.size() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

/// In-memory [`SpecialtyRepository`].
#[derive(Default)]
pub struct InMemorySpecialtyRepository {
    rows: RwLock<Vec<Specialty>>,
}

impl InMemorySpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a specialty.
    pub async fn seed(&self, specialty: Specialty) {
        self.rows.write().await.push(specialty);
    }
}

#[async_trait]
impl SpecialtyRepository for InMemorySpecialtyRepository {
    async fn find_all(&self) -> Result<Vec<Specialty>, DomainError> {
        Ok(self.rows.read().await.clone())
    }
}

/// In-memory [`VetSpecialtyRepository`].
#[derive(Default)]
pub struct InMemoryVetSpecialtyRepository {
    rows: RwLock<Vec<VetSpecialty>>,
}

impl InMemoryVetSpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a vet/specialty link.
    pub async fn link(&self, link: VetSpecialty) {
        self.rows.write().await.push(link);
    }
}

#[async_trait]
impl VetSpecialtyRepository for InMemoryVetSpecialtyRepository {
    async fn find_by_vet_id(&self, vet_id: VetId) -> Result<Vec<VetSpecialty>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|link| link.vet_id() == vet_id)
            .copied()
            .collect())
    }
}
