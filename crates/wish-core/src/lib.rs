//! # wish-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! ownership guard. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod authorization;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use authorization::{authorize_owner, check_owner, AccessDecision};
pub use entities::{
    generate_cancellation_token, Reservation, Wishlist, WishlistItem, CANCELLATION_TOKEN_LEN,
};
pub use error::DomainError;
pub use traits::{ItemRepository, RepoResult, ReservationRepository, WishlistRepository};
pub use value_objects::{InvalidStatusError, ReservationStatus};
