//! Wishlist handlers
//!
//! Owner-side wishlist endpoints.

use axum::{extract::State, Json};
use wish_service::dto::{
    CreateWishlistRequest, SetVisibilityRequest, ShareLinkResponse, UpdateWishlistRequest,
    WishlistDetailResponse, WishlistResponse, WishlistWithItemsResponse,
};
use wish_service::WishlistService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new wishlist
///
/// POST /wishlists
pub async fn create_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWishlistRequest>,
) -> ApiResult<Created<Json<WishlistResponse>>> {
    let service = WishlistService::new(state.service_context());
    let response = service.create_wishlist(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's wishlists with their items
///
/// GET /wishlists
pub async fn list_wishlists(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<WishlistWithItemsResponse>>> {
    let service = WishlistService::new(state.service_context());
    let response = service.list_wishlists(auth.user_id).await?;
    Ok(Json(response))
}

/// Owner view of one wishlist
///
/// GET /wishlists/{wishlist_id}
pub async fn get_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(wishlist_id): IdPath,
) -> ApiResult<Json<WishlistDetailResponse>> {
    let service = WishlistService::new(state.service_context());
    let response = service.get_wishlist(auth.user_id, wishlist_id).await?;
    Ok(Json(response))
}

/// PATCH /wishlists/{wishlist_id}
pub async fn update_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(wishlist_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateWishlistRequest>,
) -> ApiResult<Json<WishlistResponse>> {
    let service = WishlistService::new(state.service_context());
    let response = service
        .update_wishlist(auth.user_id, wishlist_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a wishlist with its items and reservations
///
/// DELETE /wishlists/{wishlist_id}
pub async fn delete_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(wishlist_id): IdPath,
) -> ApiResult<NoContent> {
    let service = WishlistService::new(state.service_context());
    service.delete_wishlist(auth.user_id, wishlist_id).await?;
    Ok(NoContent)
}

/// PUT /wishlists/{wishlist_id}/visibility
pub async fn set_visibility(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(wishlist_id): IdPath,
    ValidatedJson(request): ValidatedJson<SetVisibilityRequest>,
) -> ApiResult<Json<WishlistResponse>> {
    let service = WishlistService::new(state.service_context());
    let response = service
        .set_visibility(auth.user_id, wishlist_id, request.is_public)
        .await?;
    Ok(Json(response))
}

/// Public link to hand out to visitors
///
/// GET /wishlists/{wishlist_id}/share
pub async fn share_link(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(wishlist_id): IdPath,
) -> ApiResult<Json<ShareLinkResponse>> {
    let service = WishlistService::new(state.service_context());
    let response = service.share_link(auth.user_id, wishlist_id).await?;
    Ok(Json(response))
}
