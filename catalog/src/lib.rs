//! Catalog service library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds transport-agnostic
//! types and ports, `inbound` exposes the HTTP adapter, and `outbound`
//! implements the persistence adapters behind the domain ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
