//! Repository traits (ports)

mod repositories;

pub use repositories::{ItemRepository, RepoResult, ReservationRepository, WishlistRepository};
