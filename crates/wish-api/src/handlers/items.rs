//! Item handlers

use axum::{extract::State, Json};
use wish_service::dto::{ItemRequest, ItemResponse};
use wish_service::ItemService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /wishlists/{wishlist_id}/items
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(wishlist_id): IdPath,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> ApiResult<Created<Json<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let response = service.add_item(auth.user_id, wishlist_id, request).await?;
    Ok(Created(Json(response)))
}

/// Replace an item's fields
///
/// PUT /items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(item_id): IdPath,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let response = service.update_item(auth.user_id, item_id, request).await?;
    Ok(Json(response))
}

/// DELETE /items/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(item_id): IdPath,
) -> ApiResult<NoContent> {
    let service = ItemService::new(state.service_context());
    service.delete_item(auth.user_id, item_id).await?;
    Ok(NoContent)
}
