//! SearchOwnersHandler - Paginated last-name-prefix search.
//!
//! # Two-phase lookup
//!
//! Hydrating an owner joins pets and visits, which is wasted work when the
//! result is discarded: zero matches render "not found" and a single match
//! redirects to the detail view. The handler therefore resolves a cheap
//! id-only projection first and only hydrates a page when two or more ids
//! match. The hydrating query must never run for 0 or 1 matches.

use std::sync::Arc;

use crate::application::OwnerLoader;
use crate::config::PaginationConfig;
use crate::domain::foundation::{DomainError, OwnerId, Page, PageRequest};
use crate::domain::owner::Owner;
use crate::ports::OwnerRepository;

/// Query for the find-owners form. `page` is 1-based.
#[derive(Debug, Clone)]
pub struct FindOwnersQuery {
    pub last_name_prefix: String,
    pub page: u32,
}

/// Outcome of an owner search, mirroring how the boundary routes it.
#[derive(Debug)]
pub enum OwnerSearchOutcome {
    /// No owner matched; the boundary renders a "not found" message.
    NoneFound,
    /// Exactly one owner matched; the boundary redirects to its detail view.
    Single(OwnerId),
    /// Two or more matched; a hydrated page for the listing.
    Listing(Page<Owner>),
}

/// Handler for the paginated owner search.
pub struct SearchOwnersHandler {
    owners: Arc<dyn OwnerRepository>,
    loader: OwnerLoader,
    page_size: u32,
}

impl SearchOwnersHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>, loader: OwnerLoader, page_size: u32) -> Self {
        Self {
            owners,
            loader,
            page_size,
        }
    }

    /// Handler sized for the human-facing owner listing.
    pub fn for_listing(
        owners: Arc<dyn OwnerRepository>,
        loader: OwnerLoader,
        config: &PaginationConfig,
    ) -> Self {
        Self::new(owners, loader, config.owner_page_size)
    }

    /// Handler sized for programmatic consumers, which page in larger steps.
    pub fn for_api(
        owners: Arc<dyn OwnerRepository>,
        loader: OwnerLoader,
        config: &PaginationConfig,
    ) -> Self {
        Self::new(owners, loader, config.api_page_size)
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the page number is 0
    pub async fn handle(&self, query: FindOwnersQuery) -> Result<OwnerSearchOutcome, DomainError> {
        let request = PageRequest::from_one_based(query.page, self.page_size)?;
        let prefix = query.last_name_prefix.as_str();

        let ids = self.owners.find_ids_by_last_name_prefix(prefix, &request).await?;
        match ids.as_slice() {
            [] => {
                tracing::debug!(prefix, "owner search matched nothing");
                Ok(OwnerSearchOutcome::NoneFound)
            }
            [single] => {
                tracing::debug!(prefix, owner_id = %single, "owner search matched exactly one");
                Ok(OwnerSearchOutcome::Single(*single))
            }
            _ => {
                let owners = self.owners.find_by_last_name_prefix(prefix, &request).await?;
                let mut hydrated = Vec::with_capacity(owners.len());
                for owner in owners {
                    hydrated.push(self.loader.load(owner).await?);
                }
                let total = self.owners.count_by_last_name_prefix(prefix).await?;
                Ok(OwnerSearchOutcome::Listing(Page::new(hydrated, &request, total)))
            }
        }
    }
}
