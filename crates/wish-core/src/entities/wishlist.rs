//! Wishlist entity - a named collection of items owned by one user

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Wishlist entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wishlist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    /// Create a new private wishlist
    pub fn new(id: Uuid, user_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            description: None,
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Check if a user owns this wishlist
    #[inline]
    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.is_public = is_public;
        self.updated_at = Utc::now();
    }

    /// Visitor-facing URL under the given public base URL
    pub fn public_url(&self, base_url: &str) -> String {
        format!("{}/public/{}", base_url.trim_end_matches('/'), self.id)
    }
}
