//! Reservation entity <-> model mapper
//!
//! The status column is plain text, so the conversion can fail if a row was
//! written outside this service.

use wish_core::entities::Reservation;
use wish_core::error::DomainError;
use wish_core::value_objects::ReservationStatus;

use crate::models::ReservationModel;

impl TryFrom<ReservationModel> for Reservation {
    type Error = DomainError;

    fn try_from(model: ReservationModel) -> Result<Self, Self::Error> {
        let status: ReservationStatus = model.status.parse()?;

        Ok(Reservation {
            id: model.id,
            item_id: model.item_id,
            reserver_name: model.reserver_name,
            reserver_email: model.reserver_email,
            user_id: model.user_id,
            status,
            cancellation_token: model.cancellation_token,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a batch of rows, failing on the first bad status
pub fn reservations_from_models(
    models: Vec<ReservationModel>,
) -> Result<Vec<Reservation>, DomainError> {
    models.into_iter().map(Reservation::try_from).collect()
}
