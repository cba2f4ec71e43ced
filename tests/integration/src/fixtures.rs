//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;
use wish_common::{AppConfig, Claims};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// An account holder, identified only by a token from the identity provider
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestUser {
    /// Mint a token the server will accept, signed with the configured secret
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let id = Uuid::new_v4();
        let claims = Claims {
            sub: id.to_string(),
            exp: Utc::now().timestamp() + 3600,
            iat: Some(Utc::now().timestamp()),
            aud: config.jwt.audience.clone(),
            email: Some(format!("owner{}@example.com", unique_suffix())),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )?;
        Ok(Self { id, token })
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateWishlistRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateWishlistRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Birthday {}", unique_suffix()),
            description: Some("Things I would like".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
}

impl ItemRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Desk lamp {}", unique_suffix()),
            price: Some(24.5),
            purchase_url: Some("https://shop.example/lamp".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReserveRequest {
    pub reserver_name: String,
    pub reserver_email: String,
}

impl ReserveRequest {
    pub fn new(name: &str) -> Self {
        Self {
            reserver_name: name.to_string(),
            reserver_email: format!("{}{}@example.com", name.to_lowercase(), unique_suffix()),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WishlistResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct WishlistWithItemsResponse {
    #[serde(flatten)]
    pub wishlist: WishlistResponse,
    pub items: Vec<ItemResponse>,
}

#[derive(Debug, Deserialize)]
pub struct WishlistDetailResponse {
    #[serde(flatten)]
    pub wishlist: WishlistResponse,
    pub items: Vec<ItemWithReservationsResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ShareLinkResponse {
    pub wishlist_id: Uuid,
    pub url: String,
    pub is_public: bool,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ItemWithReservationsResponse {
    #[serde(flatten)]
    pub item: ItemResponse,
    pub reservations: Vec<ReservationResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub reserver_name: String,
    pub reserver_email: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ReserveResponse {
    pub reservation_id: Uuid,
    pub item_id: Uuid,
    pub status: String,
    pub cancellation_token: String,
    pub cancellation_url: String,
}

#[derive(Debug, Deserialize)]
pub struct PublicWishlistResponse {
    pub id: Uuid,
    pub title: String,
    pub items: Vec<PublicItemResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PublicItemResponse {
    pub id: Uuid,
    pub name: String,
    pub is_reserved: bool,
    pub reservation_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Path of the cancellation link for a token
pub fn cancel_path(token: &str) -> String {
    format!("/api/v1/reservations/cancel?token={token}")
}
