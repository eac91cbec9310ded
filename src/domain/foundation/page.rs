//! Pagination primitives.
//!
//! Page numbers are 1-based at the external boundary and converted to
//! 0-based here, at the single entry point.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A validated page request with a 0-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    number: u32,
    size: u32,
}

impl PageRequest {
    /// Converts a 1-based boundary page number into a request.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `page` is 0 or `size` is 0
    pub fn from_one_based(page: u32, size: u32) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::validation("page", "page numbers start at 1"));
        }
        if size == 0 {
            return Err(DomainError::validation("pageSize", "page size must be positive"));
        }
        Ok(Self {
            number: page - 1,
            size,
        })
    }

    /// The first page of the given size.
    pub fn first(size: u32) -> Self {
        Self { number: 0, size }
    }

    /// 0-based page number.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> usize {
        self.number as usize * self.size as usize
    }
}

/// A page of results plus enough context to render pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    number: u32,
    size: u32,
    total_items: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        Self {
            items,
            number: request.number(),
            size: request.size(),
            total_items,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 0-based page number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// 1-based page number for the boundary layer.
    pub fn display_number(&self) -> u32 {
        self.number + 1
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_items.div_ceil(u64::from(self.size))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
