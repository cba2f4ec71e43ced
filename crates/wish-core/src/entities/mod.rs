//! Domain entities - core business objects

mod item;
mod reservation;
mod wishlist;

pub use item::WishlistItem;
pub use reservation::{generate_cancellation_token, Reservation, CANCELLATION_TOKEN_LEN};
pub use wishlist::Wishlist;
