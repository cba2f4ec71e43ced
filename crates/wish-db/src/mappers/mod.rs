//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a column holds a value the domain has to validate

mod item;
mod reservation;
mod wishlist;

pub use reservation::reservations_from_models;
