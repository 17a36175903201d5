//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{Item, ItemDraft, ItemPatch};

use super::schema::items;

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub price_code: Option<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            price_code: row.price_code,
        }
    }
}

/// Insertable struct for creating new item records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub price_code: &'a str,
}

impl<'a> NewItemRow<'a> {
    pub(crate) fn from_draft(draft: &'a ItemDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            price: draft.price,
            price_code: &draft.price_code,
        }
    }
}

/// Changeset struct for partial updates of item records.
///
/// `None` fields are skipped by Diesel's `AsChangeset`, which is what keeps
/// unset fields from overwriting stored values.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemChangeset<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<f64>,
    pub price_code: Option<&'a str>,
}

impl<'a> ItemChangeset<'a> {
    pub(crate) fn from_patch(patch: &'a ItemPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            description: patch.description.as_deref(),
            price: patch.price,
            price_code: patch.price_code.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn changeset_skips_fields_absent_from_patch() {
        let patch = ItemPatch {
            price: Some(19.99),
            ..ItemPatch::default()
        };
        let changeset = ItemChangeset::from_patch(&patch);

        assert_eq!(changeset.price, Some(19.99));
        assert_eq!(changeset.name, None);
        assert_eq!(changeset.description, None);
        assert_eq!(changeset.price_code, None);
    }

    #[rstest]
    fn row_converts_to_domain_item() {
        let row = ItemRow {
            id: 7,
            name: Some("Widget".into()),
            description: None,
            price: Some(9.99),
            price_code: Some("USD".into()),
        };

        let item = Item::from(row);
        assert_eq!(item.id, 7);
        assert_eq!(item.name.as_deref(), Some("Widget"));
        assert_eq!(item.description, None);
    }
}
