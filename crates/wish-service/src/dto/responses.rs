//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use wish_core::ReservationStatus;

// ============================================================================
// Wishlist Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct WishlistResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dashboard entry: a wishlist with its items
#[derive(Debug, Clone, Serialize)]
pub struct WishlistWithItemsResponse {
    #[serde(flatten)]
    pub wishlist: WishlistResponse,
    pub items: Vec<ItemResponse>,
}

/// Owner view: items together with who reserved them
#[derive(Debug, Clone, Serialize)]
pub struct WishlistDetailResponse {
    #[serde(flatten)]
    pub wishlist: WishlistResponse,
    pub items: Vec<ItemWithReservationsResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub wishlist_id: Uuid,
    pub url: String,
    pub is_public: bool,
}

// ============================================================================
// Item Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub purchase_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemWithReservationsResponse {
    #[serde(flatten)]
    pub item: ItemResponse,
    /// Newest first
    pub reservations: Vec<ReservationResponse>,
}

// ============================================================================
// Reservation Responses
// ============================================================================

/// Reservation as the wishlist owner sees it (never includes the token)
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub reserver_name: String,
    pub reserver_email: String,
    pub user_id: Option<Uuid>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Returned to the reserver only
#[derive(Debug, Clone, Serialize)]
pub struct ReserveResponse {
    pub reservation_id: Uuid,
    pub item_id: Uuid,
    pub status: ReservationStatus,
    pub cancellation_token: String,
    pub cancellation_url: String,
}

// ============================================================================
// Public Responses
// ============================================================================

/// Visitor view of a public wishlist; carries no reserver identities
#[derive(Debug, Clone, Serialize)]
pub struct PublicWishlistResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<PublicItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub purchase_url: Option<String>,
    pub image_url: Option<String>,
    pub is_reserved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
