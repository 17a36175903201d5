//! Port abstraction for catalog persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Item, ItemDraft, ItemPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by catalog repository adapters.
    pub enum CatalogRepositoryError {
        /// The requested item does not exist.
        NotFound => "item not found",
        /// Pagination parameters were rejected before any query ran.
        InvalidArgument { message: String } => "{message}",
        /// Repository connection could not be established.
        Connection { message: String } => "catalog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalog repository query failed: {message}",
    }
}

/// Port for catalog item persistence.
///
/// One operation per CRUD verb plus a paginated list. Implementations own
/// classification: missing rows surface as [`CatalogRepositoryError::NotFound`]
/// and invalid pagination is rejected before any query runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a new item and return it with its assigned identifier.
    async fn create(&self, draft: ItemDraft) -> Result<Item, CatalogRepositoryError>;

    /// Fetch an item by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Item, CatalogRepositoryError>;

    /// Return the requested 1-indexed page of items, ordered by ascending
    /// identifier so pagination is stable across calls.
    async fn list(&self, page_size: i64, page: i64) -> Result<Vec<Item>, CatalogRepositoryError>;

    /// Apply the non-empty fields of `patch` to the item at `id`.
    ///
    /// Fields absent from the patch are never cleared.
    async fn update(&self, id: i64, patch: ItemPatch) -> Result<(), CatalogRepositoryError>;

    /// Remove the item at `id`.
    async fn delete(&self, id: i64) -> Result<(), CatalogRepositoryError>;
}
