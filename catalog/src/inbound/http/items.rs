//! Item CRUD handlers.
//!
//! ```text
//! GET    /api/v1/items?pageSize=&page=
//! POST   /api/v1/items
//! GET    /api/v1/items/{id}
//! PUT    /api/v1/items/{id}
//! DELETE /api/v1/items/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Item, ItemDraft, ItemPatch, PageParams};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult, ErrorResponse};

/// A stored item as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Server-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_code: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            price_code: item.price_code,
        }
    }
}

/// Create request body. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewItemRequest {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "A useful widget")]
    pub description: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = "USD")]
    pub price_code: String,
}

impl From<NewItemRequest> for ItemDraft {
    fn from(body: NewItemRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            price_code: body.price_code,
        }
    }
}

/// Partial update request body. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub price_code: Option<String>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(body: UpdateItemRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            price_code: body.price_code,
        }
    }
}

/// Pagination query parameters for the list endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Number of elements to return. Defaults to 100.
    pub page_size: Option<i64>,
    /// 1-indexed page number. Defaults to 1.
    pub page: Option<i64>,
}

/// Convert the unsigned wire identifier into the storage key type.
///
/// Values beyond the signed key range cannot exist in storage, so they
/// resolve to not-found rather than an internal error.
fn item_id(raw: u64) -> ApiResult<i64> {
    i64::try_from(raw).map_err(|_| ApiError::not_found("item not found"))
}

/// List items page by page.
#[utoipa::path(
    get,
    path = "/api/v1/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Items for the requested page", body = [ItemResponse]),
        (status = 400, description = "Malformed query parameters", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    tags = ["items"],
    operation_id = "getItems"
)]
#[get("/items")]
#[tracing::instrument(name = "list_items", skip_all, fields(page = ?query.page, page_size = ?query.page_size))]
pub async fn list_items(
    state: web::Data<HttpState>,
    query: web::Query<ListItemsQuery>,
) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let page = query.page.unwrap_or(PageParams::DEFAULT_PAGE);
    let page_size = query.page_size.unwrap_or(PageParams::DEFAULT_PAGE_SIZE);

    let items = state.catalog.list(page_size, page).await?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Fetch a single item by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    params(("id" = u64, Path, description = "Item identifier", minimum = 1)),
    responses(
        (status = 200, description = "The requested item", body = ItemResponse),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    tags = ["items"],
    operation_id = "findItemByID"
)]
#[get("/items/{id}")]
#[tracing::instrument(name = "get_item", skip_all, fields(item_id = %id))]
pub async fn get_item(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
) -> ApiResult<web::Json<ItemResponse>> {
    let item = state.catalog.find_by_id(item_id(id.into_inner())?).await?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = NewItemRequest,
    responses(
        (status = 201, description = "Created item with its assigned id", body = ItemResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
#[tracing::instrument(name = "create_item", skip_all)]
pub async fn create_item(
    state: web::Data<HttpState>,
    body: web::Json<NewItemRequest>,
) -> ApiResult<HttpResponse> {
    let item = state.catalog.create(ItemDraft::from(body.into_inner())).await?;
    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

/// Apply a partial update to the item at `id`.
#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    params(("id" = u64, Path, description = "Item identifier", minimum = 1)),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated"),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    tags = ["items"],
    operation_id = "updateItemByID"
)]
#[put("/items/{id}")]
#[tracing::instrument(name = "update_item", skip_all, fields(item_id = %id))]
pub async fn update_item(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
    body: web::Json<UpdateItemRequest>,
) -> ApiResult<HttpResponse> {
    state
        .catalog
        .update(item_id(id.into_inner())?, ItemPatch::from(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete the item at `id`.
#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    params(("id" = u64, Path, description = "Item identifier", minimum = 1)),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse)
    ),
    tags = ["items"],
    operation_id = "deleteItemByID"
)]
#[delete("/items/{id}")]
#[tracing::instrument(name = "delete_item", skip_all, fields(item_id = %id))]
pub async fn delete_item(state: web::Data<HttpState>, id: web::Path<u64>) -> ApiResult<HttpResponse> {
    state.catalog.delete(item_id(id.into_inner())?).await?;
    Ok(HttpResponse::Ok().finish())
}
