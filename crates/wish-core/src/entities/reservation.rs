//! Reservation entity - a visitor's claim on a wishlist item

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ReservationStatus;

/// Length of generated cancellation tokens
pub const CANCELLATION_TOKEN_LEN: usize = 48;

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: Uuid,
    pub item_id: Uuid,
    pub reserver_name: String,
    pub reserver_email: String,
    /// Set when the reserver was signed in
    pub user_id: Option<Uuid>,
    pub status: ReservationStatus,
    pub cancellation_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new active reservation with a fresh cancellation token
    pub fn new(
        id: Uuid,
        item_id: Uuid,
        reserver_name: String,
        reserver_email: String,
        user_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            item_id,
            reserver_name,
            reserver_email,
            user_id,
            status: ReservationStatus::Reserved,
            cancellation_token: generate_cancellation_token(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn set_status(&mut self, status: ReservationStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Link the reserver follows to cancel without signing in
    pub fn cancellation_url(&self, base_url: &str) -> String {
        format!(
            "{}/reservations/cancel?token={}",
            base_url.trim_end_matches('/'),
            self.cancellation_token
        )
    }
}

/// Generate a cryptographically secure random cancellation token
///
/// Tokens are alphanumeric so they can be embedded in a query string as-is.
pub fn generate_cancellation_token() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::thread_rng();
    (0..CANCELLATION_TOKEN_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
