//! Item entity <-> model mapper

use wish_core::entities::WishlistItem;

use crate::models::ItemModel;

impl From<ItemModel> for WishlistItem {
    fn from(model: ItemModel) -> Self {
        WishlistItem {
            id: model.id,
            wishlist_id: model.wishlist_id,
            name: model.name,
            description: model.description,
            price: model.price,
            purchase_url: model.purchase_url,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
