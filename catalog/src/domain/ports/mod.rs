//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes a strongly typed error enum so adapters map their
//! failures into predictable variants instead of returning a catch-all.

mod catalog_repository;
mod macros;

pub(crate) use macros::define_port_error;

pub use catalog_repository::{CatalogRepository, CatalogRepositoryError};

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
