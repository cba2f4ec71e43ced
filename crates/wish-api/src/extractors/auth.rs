//! Authentication extractor
//!
//! Verifies identity provider tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// `sub` claim of the token
    pub user_id: Uuid,
}

impl AuthUser {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

fn verify_bearer(state: &AppState, bearer: &Bearer) -> Result<AuthUser, ApiError> {
    let user_id = state.jwt_service().verify(bearer.token()).map_err(|e| {
        tracing::warn!(error = %e, "Rejected bearer token");
        ApiError::App(e)
    })?;

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        verify_bearer(&AppState::from_ref(state), &bearer)
    }
}

/// Optional authenticated user
///
/// `None` without an Authorization header; a present but invalid token is
/// still rejected.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                verify_bearer(&AppState::from_ref(state), &bearer).map(|auth| Self(Some(auth)))
            }
            Err(_) => Ok(Self(None)),
        }
    }
}
