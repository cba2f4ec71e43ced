//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in wish-core.

mod error;
mod item;
mod reservation;
mod wishlist;

pub use item::PgItemRepository;
pub use reservation::PgReservationRepository;
pub use wishlist::PgWishlistRepository;
