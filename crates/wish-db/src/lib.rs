//! # wish-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `wish-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wish_db::pool::{create_pool, DatabaseConfig};
//! use wish_db::repositories::PgWishlistRepository;
//! use wish_core::traits::WishlistRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     wish_db::migrations::run(&pool, wish_db::migrations::DEFAULT_MIGRATIONS_DIR).await?;
//!     let wishlists = PgWishlistRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgItemRepository, PgReservationRepository, PgWishlistRepository};
