//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the machine-readable API description served at
//! `GET /api-docs` and consumed by Swagger UI in debug builds.

use actix_web::{get, web};
use utoipa::OpenApi;

use crate::inbound::http::{ErrorResponse, health, items};
use crate::inbound::http::items::{ItemResponse, NewItemRequest, UpdateItemRequest};

/// OpenAPI document for the catalog REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "CRUD interface for paginated catalog item records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        health::healtz,
        api_docs,
    ),
    components(schemas(ItemResponse, NewItemRequest, UpdateItemRequest, ErrorResponse))
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document as JSON.
#[utoipa::path(
    get,
    path = "/api-docs",
    tags = ["docs"],
    responses(
        (status = 200, description = "OpenAPI description of this service")
    )
)]
#[get("/api-docs")]
pub async fn api_docs() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_item_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/api/v1/items", "/api/v1/items/{id}", "/healtz", "/api-docs"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }
}
