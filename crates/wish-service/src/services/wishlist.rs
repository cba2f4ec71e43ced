//! Wishlist service
//!
//! Owner-side wishlist management plus the read-only public view.

use tracing::{info, instrument};
use uuid::Uuid;
use wish_core::entities::Wishlist;
use wish_core::DomainError;

use crate::dto::{
    CreateWishlistRequest, PublicWishlistResponse, ShareLinkResponse, UpdateWishlistRequest,
    WishlistDetail, WishlistDetailResponse, WishlistResponse, WishlistWithItems,
    WishlistWithItemsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::OwnershipService;

pub struct WishlistService<'a> {
    ctx: &'a ServiceContext,
}

/// Trim a title and reject it if nothing is left
fn normalize_title(title: &str) -> ServiceResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::validation("Title must not be blank"));
    }
    Ok(title.to_string())
}

/// Blank descriptions are stored as absent
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

impl<'a> WishlistService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new private wishlist
    #[instrument(skip(self, request))]
    pub async fn create_wishlist(
        &self,
        user_id: Uuid,
        request: CreateWishlistRequest,
    ) -> ServiceResult<WishlistResponse> {
        let wishlist = Wishlist::new(Uuid::new_v4(), user_id, normalize_title(&request.title)?)
            .with_description(normalize_description(request.description));

        self.ctx.wishlist_repo().create(&wishlist).await?;

        info!(wishlist_id = %wishlist.id, %user_id, "Wishlist created");
        Ok(WishlistResponse::from(&wishlist))
    }

    /// The user's wishlists with their items, newest wishlist first
    #[instrument(skip(self))]
    pub async fn list_wishlists(&self, user_id: Uuid) -> ServiceResult<Vec<WishlistWithItemsResponse>> {
        let wishlists = self.ctx.wishlist_repo().find_by_user(user_id).await?;

        let mut result = Vec::with_capacity(wishlists.len());
        for wishlist in wishlists {
            let items = self.ctx.item_repo().find_by_wishlist(wishlist.id).await?;
            result.push(WishlistWithItemsResponse::from(WishlistWithItems { wishlist, items }));
        }

        Ok(result)
    }

    /// Owner view with reservations; other users get "not found"
    #[instrument(skip(self))]
    pub async fn get_wishlist(
        &self,
        user_id: Uuid,
        wishlist_id: Uuid,
    ) -> ServiceResult<WishlistDetailResponse> {
        let wishlist = self
            .ctx
            .wishlist_repo()
            .find_by_id(wishlist_id)
            .await?
            .filter(|w| w.is_owner(user_id))
            .ok_or(DomainError::WishlistNotFound(wishlist_id))?;

        Ok(self.load_detail(wishlist).await?.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_wishlist(
        &self,
        user_id: Uuid,
        wishlist_id: Uuid,
        request: UpdateWishlistRequest,
    ) -> ServiceResult<WishlistResponse> {
        let mut wishlist = OwnershipService::new(self.ctx)
            .owned_wishlist(wishlist_id, user_id)
            .await?;

        let mut changed = false;

        if let Some(title) = request.title {
            wishlist.set_title(normalize_title(&title)?);
            changed = true;
        }

        if let Some(description) = request.description {
            wishlist.set_description(normalize_description(Some(description)));
            changed = true;
        }

        if changed {
            self.ctx.wishlist_repo().update(&wishlist).await?;
            info!(%wishlist_id, "Wishlist updated");
        }

        Ok(WishlistResponse::from(&wishlist))
    }

    /// Delete a wishlist with all its items and reservations
    #[instrument(skip(self))]
    pub async fn delete_wishlist(&self, user_id: Uuid, wishlist_id: Uuid) -> ServiceResult<()> {
        OwnershipService::new(self.ctx)
            .require_wishlist_owner(wishlist_id, user_id)
            .await?;

        self.ctx.wishlist_repo().delete(wishlist_id).await?;

        info!(%wishlist_id, %user_id, "Wishlist deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_visibility(
        &self,
        user_id: Uuid,
        wishlist_id: Uuid,
        is_public: bool,
    ) -> ServiceResult<WishlistResponse> {
        let mut wishlist = OwnershipService::new(self.ctx)
            .owned_wishlist(wishlist_id, user_id)
            .await?;

        if wishlist.is_public != is_public {
            wishlist.set_public(is_public);
            self.ctx.wishlist_repo().update(&wishlist).await?;
            info!(%wishlist_id, is_public, "Wishlist visibility changed");
        }

        Ok(WishlistResponse::from(&wishlist))
    }

    /// Public link of the wishlist; it only resolves while the list is public
    #[instrument(skip(self))]
    pub async fn share_link(&self, user_id: Uuid, wishlist_id: Uuid) -> ServiceResult<ShareLinkResponse> {
        let wishlist = OwnershipService::new(self.ctx)
            .owned_wishlist(wishlist_id, user_id)
            .await?;

        Ok(ShareLinkResponse {
            wishlist_id,
            url: wishlist.public_url(self.ctx.public_base_url()),
            is_public: wishlist.is_public,
        })
    }

    /// Visitor view; private and missing wishlists are indistinguishable
    #[instrument(skip(self))]
    pub async fn public_wishlist(&self, wishlist_id: Uuid) -> ServiceResult<PublicWishlistResponse> {
        let wishlist = self
            .ctx
            .wishlist_repo()
            .find_public(wishlist_id)
            .await?
            .ok_or(DomainError::WishlistNotFound(wishlist_id))?;

        Ok(self.load_detail(wishlist).await?.into())
    }

    async fn load_detail(&self, wishlist: Wishlist) -> ServiceResult<WishlistDetail> {
        let items = self.ctx.item_repo().find_by_wishlist(wishlist.id).await?;
        let item_ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        let reservations = self.ctx.reservation_repo().find_by_items(&item_ids).await?;

        Ok(WishlistDetail::assemble(wishlist, items, reservations))
    }
}
