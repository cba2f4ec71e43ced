//! Database models - SQLx-compatible structs for PostgreSQL tables

mod item;
mod reservation;
mod wishlist;

pub use item::ItemModel;
pub use reservation::ReservationModel;
pub use wishlist::WishlistModel;
