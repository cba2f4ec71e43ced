//! Wishlist item entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An item on a wishlist
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub purchase_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WishlistItem {
    /// Create a new item with only the required fields
    pub fn new(id: Uuid, wishlist_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            wishlist_id,
            name,
            description: None,
            price: None,
            purchase_url: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all editable fields at once, as the edit form does
    pub fn apply_edit(
        &mut self,
        name: String,
        description: Option<String>,
        price: Option<f64>,
        purchase_url: Option<String>,
        image_url: Option<String>,
    ) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.purchase_url = purchase_url;
        self.image_url = image_url;
        self.updated_at = Utc::now();
    }
}
