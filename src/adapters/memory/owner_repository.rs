//! In-memory Owner repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OwnerId, PageRequest};
use crate::domain::owner::{Address, Owner};
use crate::ports::OwnerRepository;

struct Inner {
    rows: HashMap<i64, Owner>,
    next_id: i64,
}

/// In-memory [`OwnerRepository`].
///
/// Owners are stored without their pet collection, matching what a row
/// store would hold; prefix queries sort by last name, then id.
pub struct InMemoryOwnerRepository {
    inner: RwLock<Inner>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored owners.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

fn strip(owner: &Owner, id: OwnerId) -> Owner {
    Owner::reconstitute(
        id,
        owner.first_name().to_string(),
        owner.last_name().to_string(),
        Address::new(owner.address().street(), owner.address().city()),
        owner.telephone().to_string(),
        owner.email().map(str::to_string),
        *owner.created_at(),
        *owner.updated_at(),
    )
}

fn matching_sorted(inner: &Inner, prefix: &str) -> Vec<Owner> {
    let mut matches: Vec<Owner> = inner
        .rows
        .values()
        .filter(|owner| owner.last_name().starts_with(prefix))
        .cloned()
        .collect();
    matches.sort_by(|a, b| {
        a.last_name()
            .cmp(b.last_name())
            .then_with(|| a.id().cmp(&b.id()))
    });
    matches
}

fn cut_page(matches: Vec<Owner>, page: &PageRequest) -> Vec<Owner> {
    matches
        .into_iter()
        .skip(page.offset())
        .take(page.size() as usize)
        .collect()
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn save(&self, owner: &Owner) -> Result<Owner, DomainError> {
        let mut inner = self.inner.write().await;
        let id = match owner.id() {
            Some(id) => id,
            None => {
                let id = OwnerId::new(inner.next_id);
                inner.next_id += 1;
                id
            }
        };
        let stored = strip(owner, id);
        inner.rows.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, DomainError> {
        Ok(self.inner.read().await.rows.get(&id.value()).cloned())
    }

    async fn exists(&self, id: OwnerId) -> Result<bool, DomainError> {
        Ok(self.inner.read().await.rows.contains_key(&id.value()))
    }

    async fn find_ids_by_last_name_prefix(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Vec<OwnerId>, DomainError> {
        let inner = self.inner.read().await;
        Ok(cut_page(matching_sorted(&inner, prefix), page)
            .into_iter()
            .filter_map(|owner| owner.id())
            .collect())
    }

    async fn find_by_last_name_prefix(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Vec<Owner>, DomainError> {
        let inner = self.inner.read().await;
        Ok(cut_page(matching_sorted(&inner, prefix), page))
    }

    async fn count_by_last_name_prefix(&self, prefix: &str) -> Result<u64, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|owner| owner.last_name().starts_with(prefix))
            .count() as u64)
    }
}
