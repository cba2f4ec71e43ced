//! Wishlist entity <-> model mapper

use wish_core::entities::Wishlist;

use crate::models::WishlistModel;

impl From<WishlistModel> for Wishlist {
    fn from(model: WishlistModel) -> Self {
        Wishlist {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            is_public: model.is_public,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
