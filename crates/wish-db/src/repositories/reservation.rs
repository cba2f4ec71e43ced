//! PostgreSQL implementation of ReservationRepository
//!
//! The "one active reservation per item" rule is enforced by the partial
//! unique index `uq_reservations_active_item`; a violation of it surfaces as
//! `DomainError::ItemAlreadyReserved`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wish_core::entities::Reservation;
use wish_core::error::DomainError;
use wish_core::traits::{RepoResult, ReservationRepository};
use wish_core::value_objects::ReservationStatus;

use crate::mappers::reservations_from_models;
use crate::models::ReservationModel;

use super::error::{map_db_error, map_unique_violation, reservation_not_found};

const ACTIVE_ITEM_INDEX: &str = "uq_reservations_active_item";

/// Unique violations on the active-item index mean a concurrent reservation won
fn map_reservation_conflict(e: sqlx::Error) -> DomainError {
    let on_active_index = e
        .as_database_error()
        .and_then(|db_err| db_err.constraint())
        .is_some_and(|c| c == ACTIVE_ITEM_INDEX);

    if on_active_index {
        map_unique_violation(e, || DomainError::ItemAlreadyReserved)
    } else {
        map_db_error(e)
    }
}

#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, item_id, reserver_name, reserver_email, user_id, status,
                   cancellation_token, created_at, updated_at
            FROM reservations
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, item_id, reserver_name, reserver_email, user_id, status,
                   cancellation_token, created_at, updated_at
            FROM reservations
            WHERE cancellation_token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active_by_item(&self, item_id: Uuid) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, item_id, reserver_name, reserver_email, user_id, status,
                   cancellation_token, created_at, updated_at
            FROM reservations
            WHERE item_id = $1 AND status = 'reserved'
            ",
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reservation::try_from).transpose()
    }

    #[instrument(skip(self, item_ids), fields(count = item_ids.len()))]
    async fn find_by_items(&self, item_ids: &[Uuid]) -> RepoResult<Vec<Reservation>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, item_id, reserver_name, reserver_email, user_id, status,
                   cancellation_token, created_at, updated_at
            FROM reservations
            WHERE item_id = ANY($1)
            ORDER BY created_at DESC
            ",
        )
        .bind(item_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        reservations_from_models(results)
    }

    #[instrument(skip(self))]
    async fn find_owner(&self, reservation_id: Uuid) -> RepoResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT w.user_id
            FROM reservations r
            JOIN wishlist_items i ON i.id = r.item_id
            JOIN wishlists w ON w.id = i.wishlist_id
            WHERE r.id = $1
            ",
        )
        .bind(reservation_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, reservation), fields(reservation_id = %reservation.id, item_id = %reservation.item_id))]
    async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reservations
                (id, item_id, reserver_name, reserver_email, user_id, status,
                 cancellation_token, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(reservation.id)
        .bind(reservation.item_id)
        .bind(&reservation.reserver_name)
        .bind(&reservation.reserver_email)
        .bind(reservation.user_id)
        .bind(reservation.status.as_str())
        .bind(&reservation.cancellation_token)
        .bind(reservation.created_at)
        .bind(reservation.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::ItemNotFound(reservation.item_id)
            }
            _ => map_reservation_conflict(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: ReservationStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reservations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_reservation_conflict)?;

        if result.rows_affected() == 0 {
            return Err(reservation_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn cancel_by_token(&self, token: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE reservations
            SET status = 'cancelled', updated_at = NOW()
            WHERE cancellation_token = $1 AND status <> 'cancelled'
            ",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
