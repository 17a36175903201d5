//! Catalog item entity and pagination primitives.

use thiserror::Error;

/// A stored catalog item.
///
/// Every field except `id` is nullable at the storage layer so that partial
/// updates can leave unset fields untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Server-assigned surrogate identifier, immutable once created.
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Currency code paired with `price`.
    pub price_code: Option<String>,
}

/// A new item as submitted for creation. All fields are required; the
/// identifier is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_code: String,
}

/// A partial update. Only fields carrying `Some` are written; `None` fields
/// never overwrite stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub price_code: Option<String>,
}

impl ItemPatch {
    /// Return `true` when the patch carries no fields to write.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.price_code.is_none()
    }
}

/// Validation failure for pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page and pageSize parameters should be greater than or equal to 1")]
pub struct InvalidPageParams;

/// Validated 1-indexed pagination window.
///
/// Construction rejects `page < 1` and `page_size < 1` so a repository never
/// runs a query for an invalid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
    page_size: i64,
}

impl PageParams {
    /// Page used when the caller supplies none.
    pub const DEFAULT_PAGE: i64 = 1;
    /// Page size used when the caller supplies none.
    pub const DEFAULT_PAGE_SIZE: i64 = 100;

    /// Validate and construct a pagination window.
    pub fn new(page: i64, page_size: i64) -> Result<Self, InvalidPageParams> {
        if page < 1 || page_size < 1 {
            return Err(InvalidPageParams);
        }
        Ok(Self { page, page_size })
    }

    /// Number of rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// The requested 1-indexed page.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// The requested page size.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, 0, 1)]
    #[case(1, 100, 0, 100)]
    #[case(2, 100, 100, 100)]
    #[case(3, 25, 50, 25)]
    #[case(10, 7, 63, 7)]
    fn page_params_compute_offset_and_limit(
        #[case] page: i64,
        #[case] page_size: i64,
        #[case] offset: i64,
        #[case] limit: i64,
    ) {
        let params = PageParams::new(page, page_size).expect("valid params");
        assert_eq!(params.offset(), offset);
        assert_eq!(params.limit(), limit);
    }

    #[rstest]
    #[case(0, 100)]
    #[case(1, 0)]
    #[case(-1, 10)]
    #[case(10, -1)]
    #[case(0, 0)]
    fn page_params_reject_values_below_one(#[case] page: i64, #[case] page_size: i64) {
        assert_eq!(PageParams::new(page, page_size), Err(InvalidPageParams));
    }

    #[rstest]
    fn empty_patch_reports_empty() {
        assert!(ItemPatch::default().is_empty());
    }

    #[rstest]
    fn patch_with_any_field_is_not_empty() {
        let patch = ItemPatch {
            price: Some(9.99),
            ..ItemPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
