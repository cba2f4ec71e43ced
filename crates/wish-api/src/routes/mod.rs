//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{health, items, public, reservations, wishlists};
use crate::state::AppState;

/// Create the main API router (health checks are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(wishlist_routes())
        .merge(item_routes())
        .merge(reservation_routes())
        .merge(public_routes())
}

/// Wishlist routes (owner only)
fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlists",
            post(wishlists::create_wishlist).get(wishlists::list_wishlists),
        )
        .route(
            "/wishlists/:wishlist_id",
            get(wishlists::get_wishlist)
                .patch(wishlists::update_wishlist)
                .delete(wishlists::delete_wishlist),
        )
        .route("/wishlists/:wishlist_id/visibility", put(wishlists::set_visibility))
        .route("/wishlists/:wishlist_id/share", get(wishlists::share_link))
        .route("/wishlists/:wishlist_id/items", post(items::add_item))
}

/// Item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/:item_id", put(items::update_item).delete(items::delete_item))
        .route("/items/:item_id/reservations", post(reservations::reserve_item))
}

/// Reservation routes
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations/cancel", post(reservations::cancel_reservation))
        .route(
            "/reservations/:reservation_id",
            patch(reservations::update_reservation_status),
        )
}

/// Visitor routes
fn public_routes() -> Router<AppState> {
    Router::new().route("/public/:wishlist_id", get(public::get_public_wishlist))
}
