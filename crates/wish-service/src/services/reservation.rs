//! Reservation service
//!
//! Visitors reserve items without an account and cancel through the token
//! sent to them. The wishlist owner can move a reservation between statuses.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use wish_core::entities::Reservation;
use wish_core::{DomainError, ReservationStatus};

use crate::dto::{ReservationResponse, ReserveItemRequest, ReserveResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notifier::ReservationNotice;
use super::ownership::OwnershipService;

/// Shortest reserver name accepted, counted after trimming
const MIN_RESERVER_NAME_CHARS: usize = 2;

fn normalize_reserver_name(name: &str) -> ServiceResult<String> {
    let name = name.trim();
    if name.chars().count() < MIN_RESERVER_NAME_CHARS {
        return Err(ServiceError::validation("Name must be 2-100 characters"));
    }
    Ok(name.to_string())
}

pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reserve an item and notify the reserver
    ///
    /// `acting_user` is recorded when the visitor is signed in.
    #[instrument(skip(self, request))]
    pub async fn reserve(
        &self,
        item_id: Uuid,
        request: ReserveItemRequest,
        acting_user: Option<Uuid>,
    ) -> ServiceResult<ReserveResponse> {
        let reserver_name = normalize_reserver_name(&request.reserver_name)?;

        let item = self
            .ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or(DomainError::ItemNotFound(item_id))?;

        // Friendly early error; the storage constraint is what actually
        // settles concurrent reservations.
        if self
            .ctx
            .reservation_repo()
            .find_active_by_item(item_id)
            .await?
            .is_some()
        {
            return Err(DomainError::ItemAlreadyReserved.into());
        }

        let reservation = Reservation::new(
            Uuid::new_v4(),
            item_id,
            reserver_name,
            request.reserver_email.trim().to_string(),
            acting_user,
        );

        self.ctx.reservation_repo().create(&reservation).await?;

        let cancellation_url = reservation.cancellation_url(self.ctx.public_base_url());
        info!(reservation_id = %reservation.id, %item_id, "Item reserved");

        let notice = ReservationNotice {
            reservation_id: reservation.id,
            item_name: item.name,
            reserver_name: reservation.reserver_name.clone(),
            reserver_email: reservation.reserver_email.clone(),
            cancellation_url: cancellation_url.clone(),
        };
        if let Err(e) = self.ctx.notifier().reservation_created(&notice).await {
            warn!(
                reservation_id = %reservation.id,
                error = %e,
                "Failed to send reservation confirmation"
            );
        }

        Ok(ReserveResponse {
            reservation_id: reservation.id,
            item_id,
            status: reservation.status,
            cancellation_token: reservation.cancellation_token,
            cancellation_url,
        })
    }

    /// Cancel the reservation identified by `token`
    #[instrument(skip_all)]
    pub async fn cancel(&self, token: &str) -> ServiceResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServiceError::validation("Cancellation token is required"));
        }

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_token(token)
            .await?
            .ok_or(DomainError::InvalidCancellationToken)?;

        if reservation.status.is_cancelled() {
            return Err(DomainError::ReservationAlreadyCancelled.into());
        }

        // Another request may have cancelled in between
        if !self.ctx.reservation_repo().cancel_by_token(token).await? {
            return Err(DomainError::ReservationAlreadyCancelled.into());
        }

        info!(reservation_id = %reservation.id, "Reservation cancelled");
        Ok(())
    }

    /// Owner-only status change
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        user_id: Uuid,
        reservation_id: Uuid,
        status: ReservationStatus,
    ) -> ServiceResult<ReservationResponse> {
        OwnershipService::new(self.ctx)
            .require_reservation_owner(reservation_id, user_id)
            .await?;

        self.ctx
            .reservation_repo()
            .update_status(reservation_id, status)
            .await?;

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        info!(%reservation_id, %status, "Reservation status updated");
        Ok(ReservationResponse::from(reservation))
    }
}
