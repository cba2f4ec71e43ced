//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod health;
pub mod items;
pub mod public;
pub mod reservations;
pub mod wishlists;
