//! Reservation handlers
//!
//! Reserving and cancelling need no account; status changes are owner-only.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use wish_service::dto::{
    CancelReservationQuery, ReservationResponse, ReserveItemRequest, ReserveResponse,
    UpdateReservationStatusRequest,
};
use wish_service::ReservationService;

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Reserve an item
///
/// POST /items/{item_id}/reservations
pub async fn reserve_item(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    IdPath(item_id): IdPath,
    ValidatedJson(request): ValidatedJson<ReserveItemRequest>,
) -> ApiResult<Created<Json<ReserveResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.reserve(item_id, request, auth.user_id()).await?;
    Ok(Created(Json(response)))
}

/// Cancel through the link sent to the reserver
///
/// POST /reservations/cancel?token={token}
pub async fn cancel_reservation(
    State(state): State<AppState>,
    query: Result<Query<CancelReservationQuery>, QueryRejection>,
) -> ApiResult<NoContent> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = ReservationService::new(state.service_context());
    service.cancel(&query.token).await?;
    Ok(NoContent)
}

/// PATCH /reservations/{reservation_id}
pub async fn update_reservation_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(reservation_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateReservationStatusRequest>,
) -> ApiResult<Json<ReservationResponse>> {
    let service = ReservationService::new(state.service_context());
    let response = service
        .update_status(auth.user_id, reservation_id, request.status)
        .await?;
    Ok(Json(response))
}
