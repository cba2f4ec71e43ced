//! Reservation notifications
//!
//! After a successful reservation the reserver gets a message with the link
//! that cancels it. Delivery is best-effort: failures are logged by the caller
//! and never undo the reservation.

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

/// Everything a notifier needs to tell the reserver about their reservation
#[derive(Debug, Clone)]
pub struct ReservationNotice {
    pub reservation_id: Uuid,
    pub item_name: String,
    pub reserver_name: String,
    pub reserver_email: String,
    pub cancellation_url: String,
}

#[async_trait]
pub trait ReservationNotifier: Send + Sync {
    async fn reservation_created(&self, notice: &ReservationNotice) -> anyhow::Result<()>;
}

/// Writes the notice to the log instead of sending mail
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

#[async_trait]
impl ReservationNotifier for LoggingNotifier {
    async fn reservation_created(&self, notice: &ReservationNotice) -> anyhow::Result<()> {
        info!(
            reservation_id = %notice.reservation_id,
            item = %notice.item_name,
            "Reservation confirmation for {}",
            notice.reserver_name
        );
        // The link cancels the reservation for whoever holds it
        debug!(
            reservation_id = %notice.reservation_id,
            cancellation_url = %notice.cancellation_url,
            "Cancellation link"
        );
        Ok(())
    }
}
