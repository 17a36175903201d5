//! PostgreSQL-backed [`CatalogRepository`] implementation using Diesel ORM.
//!
//! A thin adapter: each port operation is a single statement, so the
//! database owns all transactional integrity. Rows affected by updates and
//! deletes are checked so missing identifiers surface as `NotFound` instead
//! of succeeding silently.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CatalogRepository, CatalogRepositoryError};
use crate::domain::{Item, ItemDraft, ItemPatch, PageParams};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::DbPool;
use super::schema::items;

/// Diesel-backed implementation of the [`CatalogRepository`] port.
#[derive(Clone)]
pub struct DieselCatalogRepository {
    pool: DbPool,
}

impl DieselCatalogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Translate an update or delete row count into the port's contract: zero
/// affected rows means the identifier does not exist.
fn rows_affected_outcome(affected: usize) -> Result<(), CatalogRepositoryError> {
    if affected == 0 {
        return Err(CatalogRepositoryError::not_found());
    }
    Ok(())
}

/// Outcome of an empty patch, where an existence check replaces the write.
fn existence_outcome(exists: bool) -> Result<(), CatalogRepositoryError> {
    if exists {
        Ok(())
    } else {
        Err(CatalogRepositoryError::not_found())
    }
}

#[async_trait]
impl CatalogRepository for DieselCatalogRepository {
    async fn create(&self, draft: ItemDraft) -> Result<Item, CatalogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(items::table)
            .values(NewItemRow::from_draft(&draft))
            .returning(ItemRow::as_returning())
            .get_result::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Item::from(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Item, CatalogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = items::table
            .find(id)
            .select(ItemRow::as_select())
            .first::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Item::from(row))
    }

    async fn list(&self, page_size: i64, page: i64) -> Result<Vec<Item>, CatalogRepositoryError> {
        // Reject the window before any connection is checked out.
        let params = PageParams::new(page, page_size)
            .map_err(|err| CatalogRepositoryError::invalid_argument(err.to_string()))?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = items::table
            .order(items::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(ItemRow::as_select())
            .load::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn update(&self, id: i64, patch: ItemPatch) -> Result<(), CatalogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        if patch.is_empty() {
            // Nothing to write; still report whether the identifier exists.
            let exists = diesel::select(diesel::dsl::exists(
                items::table.filter(items::id.eq(id)),
            ))
            .get_result::<bool>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

            return existence_outcome(exists);
        }

        let affected = diesel::update(items::table.find(id))
            .set(ItemChangeset::from_patch(&patch))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_affected_outcome(affected)
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(items::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_affected_outcome(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_affected_rows_surface_not_found() {
        assert_eq!(
            rows_affected_outcome(0),
            Err(CatalogRepositoryError::not_found())
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    fn affected_rows_succeed(#[case] affected: usize) {
        assert_eq!(rows_affected_outcome(affected), Ok(()));
    }

    #[rstest]
    fn empty_patch_on_existing_id_succeeds() {
        assert_eq!(existence_outcome(true), Ok(()));
    }

    #[rstest]
    fn empty_patch_on_missing_id_surfaces_not_found() {
        assert_eq!(
            existence_outcome(false),
            Err(CatalogRepositoryError::not_found())
        );
    }
}
