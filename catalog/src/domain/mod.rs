//! Domain types for the catalog service.
//!
//! Everything in this module is transport and storage agnostic. Inbound
//! adapters bind HTTP payloads to these types; outbound adapters translate
//! them into relational queries through the ports in [`ports`].

mod item;
pub mod ports;

pub use item::{InvalidPageParams, Item, ItemDraft, ItemPatch, PageParams};
