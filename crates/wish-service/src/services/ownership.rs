//! Ownership service
//!
//! Resolves who owns a wishlist, item or reservation and runs the acting user
//! through `wish_core::authorize_owner`. Every mutating service call goes
//! through here before it writes.

use tracing::{instrument, warn};
use uuid::Uuid;
use wish_core::entities::{Wishlist, WishlistItem};
use wish_core::{authorize_owner, DomainError};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const WISHLIST_DENIED: &str = "Not authorized to modify this wishlist";
const ITEM_DENIED: &str = "Not authorized to edit this item";
const RESERVATION_DENIED: &str = "Not authorized to update this reservation";

pub struct OwnershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OwnershipService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn authorize(owner_id: Uuid, user_id: Uuid, denied: &str) -> ServiceResult<()> {
        authorize_owner(owner_id, user_id).map_err(|_| {
            warn!(%owner_id, %user_id, "Ownership check failed");
            ServiceError::forbidden(denied)
        })
    }

    /// Ensure `user_id` owns the wishlist
    #[instrument(skip(self))]
    pub async fn require_wishlist_owner(&self, wishlist_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let owner_id = self
            .ctx
            .wishlist_repo()
            .find_owner(wishlist_id)
            .await?
            .ok_or(DomainError::WishlistNotFound(wishlist_id))?;

        Self::authorize(owner_id, user_id, WISHLIST_DENIED)
    }

    /// Ensure `user_id` owns the wishlist containing the item
    #[instrument(skip(self))]
    pub async fn require_item_owner(&self, item_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let owner_id = self
            .ctx
            .item_repo()
            .find_owner(item_id)
            .await?
            .ok_or(DomainError::ItemNotFound(item_id))?;

        Self::authorize(owner_id, user_id, ITEM_DENIED)
    }

    /// Ensure `user_id` owns the wishlist containing the reserved item
    #[instrument(skip(self))]
    pub async fn require_reservation_owner(
        &self,
        reservation_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<()> {
        let owner_id = self
            .ctx
            .reservation_repo()
            .find_owner(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        Self::authorize(owner_id, user_id, RESERVATION_DENIED)
    }

    /// Load a wishlist the user owns, for read-modify-write updates
    #[instrument(skip(self))]
    pub async fn owned_wishlist(&self, wishlist_id: Uuid, user_id: Uuid) -> ServiceResult<Wishlist> {
        let wishlist = self
            .ctx
            .wishlist_repo()
            .find_by_id(wishlist_id)
            .await?
            .ok_or(DomainError::WishlistNotFound(wishlist_id))?;

        Self::authorize(wishlist.user_id, user_id, WISHLIST_DENIED)?;
        Ok(wishlist)
    }

    /// Load an item whose wishlist the user owns
    #[instrument(skip(self))]
    pub async fn owned_item(&self, item_id: Uuid, user_id: Uuid) -> ServiceResult<WishlistItem> {
        self.require_item_owner(item_id, user_id).await?;

        self.ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::ItemNotFound(item_id).into())
    }
}
