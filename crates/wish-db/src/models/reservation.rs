//! Reservation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reservations table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: Uuid,
    pub item_id: Uuid,
    pub reserver_name: String,
    pub reserver_email: String,
    pub user_id: Option<Uuid>,
    /// One of `reserved`, `purchased`, `cancelled` (CHECK constraint)
    pub status: String,
    pub cancellation_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReservationModel {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == "reserved"
    }
}
