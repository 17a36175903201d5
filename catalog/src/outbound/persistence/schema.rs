//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. `diesel print-schema` can regenerate them from a live
//! database when migrations change.

diesel::table! {
    /// Catalog item records.
    ///
    /// Every column except the surrogate key is nullable so partial updates
    /// can leave unset fields untouched.
    items (id) {
        /// Primary key: server-assigned surrogate identifier.
        id -> Int8,
        /// Item name.
        name -> Nullable<Text>,
        /// Item description.
        description -> Nullable<Text>,
        /// Item price.
        price -> Nullable<Float8>,
        /// Currency code paired with `price`.
        price_code -> Nullable<Text>,
    }
}
