//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CancelReservationQuery, CreateWishlistRequest, ItemRequest, ReserveItemRequest,
    SetVisibilityRequest, UpdateReservationStatusRequest, UpdateWishlistRequest,
};

pub use responses::{
    HealthChecks, HealthResponse, ItemResponse, ItemWithReservationsResponse, PublicItemResponse,
    PublicWishlistResponse, ReadinessResponse, ReservationResponse, ReserveResponse,
    ShareLinkResponse, WishlistDetailResponse, WishlistResponse, WishlistWithItemsResponse,
};

pub use mappers::{ItemWithReservations, WishlistDetail, WishlistWithItems};
