//! # wish-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    ItemService, LoggingNotifier, OwnershipService, ReservationNotice, ReservationNotifier,
    ReservationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    WishlistService,
};
