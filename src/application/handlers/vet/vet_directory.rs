//! VetDirectory - Cached, read-only view of the vet roster.
//!
//! # Caching
//!
//! The full roster is built once and then shared: every caller of
//! [`VetDirectory::all_vets`] receives a clone of the same `Arc` until
//! [`VetDirectory::invalidate`] drops the snapshot. A snapshot is fully
//! assembled, specialties included, before it becomes visible, so readers
//! never observe a half-hydrated vet.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Page, PageRequest, SpecialtyId};
use crate::domain::vet::{Specialty, Vet};
use crate::ports::{SpecialtyRepository, VetRepository, VetSpecialtyRepository};

/// Read-side service for listing vets, with a cached full-roster snapshot.
pub struct VetDirectory {
    vets: Arc<dyn VetRepository>,
    specialties: Arc<dyn SpecialtyRepository>,
    links: Arc<dyn VetSpecialtyRepository>,
    page_size: u32,
    cache: RwLock<Option<Arc<Vec<Vet>>>>,
}

impl VetDirectory {
    pub fn new(
        vets: Arc<dyn VetRepository>,
        specialties: Arc<dyn SpecialtyRepository>,
        links: Arc<dyn VetSpecialtyRepository>,
        page_size: u32,
    ) -> Self {
        Self {
            vets,
            specialties,
            links,
            page_size,
            cache: RwLock::new(None),
        }
    }

    /// The full roster, served from the snapshot when one exists.
    pub async fn all_vets(&self) -> Result<Arc<Vec<Vet>>, DomainError> {
        if let Some(snapshot) = self.cache.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let mut slot = self.cache.write().await;
        // Re-check: another task may have built the snapshot while this one
        // waited for the write lock.
        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let vets = self.vets.find_all().await?;
        let hydrated = self.attach_specialties(vets).await?;
        let snapshot = Arc::new(hydrated);
        *slot = Some(Arc::clone(&snapshot));
        tracing::debug!(vets = snapshot.len(), "vet roster snapshot built");
        Ok(snapshot)
    }

    /// Drops the cached snapshot; the next read rebuilds it.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
        tracing::debug!("vet roster snapshot invalidated");
    }

    /// A page of the roster. Pages bypass the snapshot and read storage
    /// directly. `page` is 1-based.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the page number is 0
    pub async fn find_paginated(&self, page: u32) -> Result<Page<Vet>, DomainError> {
        let request = PageRequest::from_one_based(page, self.page_size)?;
        let vets = self.vets.find_page(&request).await?;
        let hydrated = self.attach_specialties(vets).await?;
        let total = self.vets.count().await?;
        Ok(Page::new(hydrated, &request, total))
    }

    /// Attaches specialties to every vet that has none yet.
    ///
    /// The specialty table is fetched at most once per batch, however many
    /// vets need hydration; already-hydrated vets are left untouched.
    async fn attach_specialties(&self, vets: Vec<Vet>) -> Result<Vec<Vet>, DomainError> {
        if vets.iter().all(|vet| vet.nr_of_specialties() > 0) {
            return Ok(vets);
        }

        let by_id: HashMap<SpecialtyId, Specialty> = self
            .specialties
            .find_all()
            .await?
            .into_iter()
            .filter_map(|s| s.id().map(|id| (id, s)))
            .collect();

        let mut hydrated = Vec::with_capacity(vets.len());
        for mut vet in vets {
            if vet.nr_of_specialties() == 0 {
                if let Some(vet_id) = vet.id() {
                    for link in self.links.find_by_vet_id(vet_id).await? {
                        if let Some(specialty) = by_id.get(&link.specialty_id()) {
                            vet.add_specialty(specialty.clone());
                        }
                    }
                }
            }
            hydrated.push(vet);
        }
        Ok(hydrated)
    }
}
