//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wish_core::entities::WishlistItem;
use wish_core::error::DomainError;
use wish_core::traits::{ItemRepository, RepoResult};

use crate::models::ItemModel;

use super::error::{item_not_found, map_db_error};

#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<WishlistItem>> {
        let result = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, wishlist_id, name, description, price, purchase_url, image_url,
                   created_at, updated_at
            FROM wishlist_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(WishlistItem::from))
    }

    #[instrument(skip(self))]
    async fn find_by_wishlist(&self, wishlist_id: Uuid) -> RepoResult<Vec<WishlistItem>> {
        let results = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, wishlist_id, name, description, price, purchase_url, image_url,
                   created_at, updated_at
            FROM wishlist_items
            WHERE wishlist_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(wishlist_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(WishlistItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_owner(&self, item_id: Uuid) -> RepoResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT w.user_id
            FROM wishlist_items i
            JOIN wishlists w ON w.id = i.wishlist_id
            WHERE i.id = $1
            ",
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn create(&self, item: &WishlistItem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO wishlist_items
                (id, wishlist_id, name, description, price, purchase_url, image_url,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(item.id)
        .bind(item.wishlist_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.purchase_url)
        .bind(&item.image_url)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            // Parent wishlist deleted between the ownership check and the insert
            Some(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::WishlistNotFound(item.wishlist_id)
            }
            _ => map_db_error(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn update(&self, item: &WishlistItem) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE wishlist_items
            SET name = $2, description = $3, price = $4, purchase_url = $5, image_url = $6,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.purchase_url)
        .bind(&item.image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(id));
        }

        Ok(())
    }
}
