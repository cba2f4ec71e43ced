//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where they carry user input,
//! `Validate`.

use serde::Deserialize;
use validator::Validate;
use wish_core::ReservationStatus;

// ============================================================================
// Wishlist Requests
// ============================================================================

/// Create wishlist request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWishlistRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update wishlist request
///
/// Absent fields are left alone. An empty description clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWishlistRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Toggle wishlist visibility
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct SetVisibilityRequest {
    pub is_public: bool,
}

// ============================================================================
// Item Requests
// ============================================================================

/// Item fields as submitted by the add and edit forms
///
/// Editing replaces every field, so an omitted optional field is cleared.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(url(message = "Purchase link must be a valid URL"))]
    pub purchase_url: Option<String>,

    #[validate(url(message = "Image link must be a valid URL"))]
    pub image_url: Option<String>,
}

// ============================================================================
// Reservation Requests
// ============================================================================

/// Visitor reservation form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReserveItemRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub reserver_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub reserver_email: String,
}

/// Query string of the cancellation link
#[derive(Debug, Clone, Deserialize)]
pub struct CancelReservationQuery {
    #[serde(default)]
    pub token: String,
}

/// Owner-side status change
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UpdateReservationStatusRequest {
    pub status: ReservationStatus,
}
