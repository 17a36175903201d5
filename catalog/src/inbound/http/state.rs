//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CatalogRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalog persistence port used by every item endpoint.
    pub catalog: Arc<dyn CatalogRepository>,
}

impl HttpState {
    /// Bundle the catalog port for handler injection.
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }
}
