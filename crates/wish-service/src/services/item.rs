//! Item service

use tracing::{info, instrument};
use uuid::Uuid;
use wish_core::entities::WishlistItem;

use crate::dto::{ItemRequest, ItemResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::OwnershipService;

pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

/// Optional text fields left blank by the form count as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn normalize_name(name: &str) -> ServiceResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::validation("Name must not be blank"));
    }
    Ok(name.to_string())
}

impl<'a> ItemService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request))]
    pub async fn add_item(
        &self,
        user_id: Uuid,
        wishlist_id: Uuid,
        request: ItemRequest,
    ) -> ServiceResult<ItemResponse> {
        OwnershipService::new(self.ctx)
            .require_wishlist_owner(wishlist_id, user_id)
            .await?;

        let mut item = WishlistItem::new(Uuid::new_v4(), wishlist_id, normalize_name(&request.name)?);
        item.description = non_blank(request.description);
        item.price = request.price;
        item.purchase_url = non_blank(request.purchase_url);
        item.image_url = non_blank(request.image_url);

        self.ctx.item_repo().create(&item).await?;

        info!(item_id = %item.id, %wishlist_id, "Item added");
        Ok(ItemResponse::from(&item))
    }

    /// Replace every editable field of the item
    #[instrument(skip(self, request))]
    pub async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        request: ItemRequest,
    ) -> ServiceResult<ItemResponse> {
        let mut item = OwnershipService::new(self.ctx)
            .owned_item(item_id, user_id)
            .await?;

        item.apply_edit(
            normalize_name(&request.name)?,
            non_blank(request.description),
            request.price,
            non_blank(request.purchase_url),
            non_blank(request.image_url),
        );

        self.ctx.item_repo().update(&item).await?;

        info!(%item_id, "Item updated");
        Ok(ItemResponse::from(&item))
    }

    /// Delete an item and its reservations
    #[instrument(skip(self))]
    pub async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> ServiceResult<()> {
        OwnershipService::new(self.ctx)
            .require_item_owner(item_id, user_id)
            .await?;

        self.ctx.item_repo().delete(item_id).await?;

        info!(%item_id, %user_id, "Item deleted");
        Ok(())
    }
}
