//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Reservation, Wishlist, WishlistItem};
use crate::error::DomainError;
use crate::value_objects::ReservationStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Wishlist Repository
// ============================================================================

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Find wishlist by ID regardless of visibility
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Wishlist>>;

    /// Find wishlist by ID only if it is public
    async fn find_public(&self, id: Uuid) -> RepoResult<Option<Wishlist>>;

    /// List all wishlists owned by a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Wishlist>>;

    /// Owner of a wishlist
    async fn find_owner(&self, id: Uuid) -> RepoResult<Option<Uuid>>;

    /// Create a new wishlist
    async fn create(&self, wishlist: &Wishlist) -> RepoResult<()>;

    /// Update title, description and visibility
    async fn update(&self, wishlist: &Wishlist) -> RepoResult<()>;

    /// Delete a wishlist together with its items and their reservations
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Item Repository
// ============================================================================

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find item by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<WishlistItem>>;

    /// List all items on a wishlist, oldest first
    async fn find_by_wishlist(&self, wishlist_id: Uuid) -> RepoResult<Vec<WishlistItem>>;

    /// Owner of the wishlist containing the item
    async fn find_owner(&self, item_id: Uuid) -> RepoResult<Option<Uuid>>;

    /// Create a new item
    async fn create(&self, item: &WishlistItem) -> RepoResult<()>;

    /// Update all editable fields of an item
    async fn update(&self, item: &WishlistItem) -> RepoResult<()>;

    /// Delete an item together with its reservations
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reservation>>;

    /// Find reservation by its cancellation token
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Reservation>>;

    /// Find the active ("reserved") reservation of an item, if any
    async fn find_active_by_item(&self, item_id: Uuid) -> RepoResult<Option<Reservation>>;

    /// List reservations for a set of items, newest first
    async fn find_by_items(&self, item_ids: &[Uuid]) -> RepoResult<Vec<Reservation>>;

    /// Owner of the wishlist containing the reserved item
    async fn find_owner(&self, reservation_id: Uuid) -> RepoResult<Option<Uuid>>;

    /// Insert a reservation
    ///
    /// Fails with `DomainError::ItemAlreadyReserved` if the reservation is
    /// active and the item already has an active reservation. Implementations
    /// must enforce this atomically.
    async fn create(&self, reservation: &Reservation) -> RepoResult<()>;

    /// Set the status of a reservation
    ///
    /// Same atomic "one active reservation per item" rule as `create`.
    async fn update_status(&self, id: Uuid, status: ReservationStatus) -> RepoResult<()>;

    /// Cancel the reservation holding `token` unless it is already cancelled
    ///
    /// Returns `false` when no row changed (already cancelled or no match).
    async fn cancel_by_token(&self, token: &str) -> RepoResult<bool>;
}
