//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Wishlist not found: {0}")]
    WishlistNotFound(Uuid),

    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(Uuid),

    #[error("Invalid cancellation token")]
    InvalidCancellationToken,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid reservation status: {0}")]
    InvalidStatus(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authorized to modify this wishlist")]
    NotWishlistOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("This item is already reserved")]
    ItemAlreadyReserved,

    #[error("Reservation is already cancelled")]
    ReservationAlreadyCancelled,

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::WishlistNotFound(_) => "UNKNOWN_WISHLIST",
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::InvalidCancellationToken => "INVALID_CANCELLATION_TOKEN",

            // Validation
            Self::InvalidStatus(_) => "INVALID_STATUS",

            // Authorization
            Self::NotWishlistOwner => "NOT_WISHLIST_OWNER",

            // Conflict
            Self::ItemAlreadyReserved => "ITEM_ALREADY_RESERVED",
            Self::ReservationAlreadyCancelled => "RESERVATION_ALREADY_CANCELLED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WishlistNotFound(_)
                | Self::ItemNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::InvalidCancellationToken
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidStatus(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotWishlistOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ItemAlreadyReserved | Self::ReservationAlreadyCancelled
        )
    }
}

impl From<crate::value_objects::InvalidStatusError> for DomainError {
    fn from(err: crate::value_objects::InvalidStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}
