//! Visitor-facing read-only view

use axum::{extract::State, Json};
use wish_service::dto::PublicWishlistResponse;
use wish_service::WishlistService;

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /public/{wishlist_id}
pub async fn get_public_wishlist(
    State(state): State<AppState>,
    IdPath(wishlist_id): IdPath,
) -> ApiResult<Json<PublicWishlistResponse>> {
    let service = WishlistService::new(state.service_context());
    let response = service.public_wishlist(wishlist_id).await?;
    Ok(Json(response))
}
