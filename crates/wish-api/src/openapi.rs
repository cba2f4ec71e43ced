//! OpenAPI document served at `/api-docs/openapi.json`
//!
//! The path functions below only carry `#[utoipa::path]` metadata; the real
//! handlers live in `crate::handlers`.

#![allow(dead_code)]

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::response::{ErrorBody, ErrorDetail};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_doc,
        readiness_doc,
        create_wishlist_doc,
        list_wishlists_doc,
        get_wishlist_doc,
        update_wishlist_doc,
        delete_wishlist_doc,
        set_visibility_doc,
        share_link_doc,
        add_item_doc,
        update_item_doc,
        delete_item_doc,
        reserve_item_doc,
        cancel_reservation_doc,
        update_reservation_status_doc,
        public_wishlist_doc
    ),
    components(schemas(ErrorBody, ErrorDetail)),
    modifiers(&BearerAuth),
    tags(
        (name = "wishlists", description = "Owner-side wishlist management"),
        (name = "reservations", description = "Visitor reservations"),
        (name = "public", description = "Read-only visitor view")
    )
)]
pub struct WishApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn document() -> utoipa::openapi::OpenApi {
    WishApiDoc::openapi()
}

#[utoipa::path(get, path = "/health", responses((status = 200, body = serde_json::Value)))]
fn health_doc() {}

#[utoipa::path(
    get,
    path = "/health/ready",
    responses((status = 200, body = serde_json::Value), (status = 503, body = serde_json::Value))
)]
fn readiness_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/wishlists",
    tag = "wishlists",
    security(("bearer" = [])),
    request_body = serde_json::Value,
    responses(
        (status = 201, body = serde_json::Value),
        (status = 400, body = ErrorBody),
        (status = 401, body = ErrorBody)
    )
)]
fn create_wishlist_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/wishlists",
    tag = "wishlists",
    security(("bearer" = [])),
    responses((status = 200, body = serde_json::Value), (status = 401, body = ErrorBody))
)]
fn list_wishlists_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/wishlists/{wishlist_id}",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    responses((status = 200, body = serde_json::Value), (status = 404, body = ErrorBody))
)]
fn get_wishlist_doc() {}

#[utoipa::path(
    patch,
    path = "/api/v1/wishlists/{wishlist_id}",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, body = serde_json::Value),
        (status = 403, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
fn update_wishlist_doc() {}

#[utoipa::path(
    delete,
    path = "/api/v1/wishlists/{wishlist_id}",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    responses(
        (status = 204, description = "No content"),
        (status = 403, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
fn delete_wishlist_doc() {}

#[utoipa::path(
    put,
    path = "/api/v1/wishlists/{wishlist_id}/visibility",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    request_body = serde_json::Value,
    responses((status = 200, body = serde_json::Value), (status = 403, body = ErrorBody))
)]
fn set_visibility_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/wishlists/{wishlist_id}/share",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    responses((status = 200, body = serde_json::Value), (status = 403, body = ErrorBody))
)]
fn share_link_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/wishlists/{wishlist_id}/items",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    request_body = serde_json::Value,
    responses(
        (status = 201, body = serde_json::Value),
        (status = 400, body = ErrorBody),
        (status = 403, body = ErrorBody)
    )
)]
fn add_item_doc() {}

#[utoipa::path(
    put,
    path = "/api/v1/items/{item_id}",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("item_id" = uuid::Uuid, Path, description = "Item id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, body = serde_json::Value),
        (status = 403, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
fn update_item_doc() {}

#[utoipa::path(
    delete,
    path = "/api/v1/items/{item_id}",
    tag = "wishlists",
    security(("bearer" = [])),
    params(("item_id" = uuid::Uuid, Path, description = "Item id")),
    responses((status = 204, description = "No content"), (status = 403, body = ErrorBody), (status = 404, body = ErrorBody))
)]
fn delete_item_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/items/{item_id}/reservations",
    tag = "reservations",
    params(("item_id" = uuid::Uuid, Path, description = "Item id")),
    request_body = serde_json::Value,
    responses(
        (status = 201, body = serde_json::Value),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody)
    )
)]
fn reserve_item_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/cancel",
    tag = "reservations",
    params(("token" = String, Query, description = "Cancellation token")),
    responses(
        (status = 204, description = "No content"),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody)
    )
)]
fn cancel_reservation_doc() {}

#[utoipa::path(
    patch,
    path = "/api/v1/reservations/{reservation_id}",
    tag = "reservations",
    security(("bearer" = [])),
    params(("reservation_id" = uuid::Uuid, Path, description = "Reservation id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, body = serde_json::Value),
        (status = 403, body = ErrorBody),
        (status = 409, body = ErrorBody)
    )
)]
fn update_reservation_status_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/public/{wishlist_id}",
    tag = "public",
    params(("wishlist_id" = uuid::Uuid, Path, description = "Wishlist id")),
    responses((status = 200, body = serde_json::Value), (status = 404, body = ErrorBody))
)]
fn public_wishlist_doc() {}
