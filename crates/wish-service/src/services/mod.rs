//! Business logic services
//!
//! Services borrow a `ServiceContext` for the duration of one request and
//! receive the acting user explicitly.

pub mod context;
pub mod error;
pub mod item;
pub mod notifier;
pub mod ownership;
pub mod reservation;
pub mod wishlist;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use item::ItemService;
pub use notifier::{LoggingNotifier, ReservationNotice, ReservationNotifier};
pub use ownership::OwnershipService;
pub use reservation::ReservationService;
pub use wishlist::WishlistService;
