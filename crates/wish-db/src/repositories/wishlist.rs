//! PostgreSQL implementation of WishlistRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wish_core::entities::Wishlist;
use wish_core::traits::{RepoResult, WishlistRepository};

use crate::models::WishlistModel;

use super::error::{map_db_error, wishlist_not_found};

/// PostgreSQL implementation of WishlistRepository
#[derive(Clone)]
pub struct PgWishlistRepository {
    pool: PgPool,
}

impl PgWishlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for PgWishlistRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Wishlist>> {
        let result = sqlx::query_as::<_, WishlistModel>(
            r"
            SELECT id, user_id, title, description, is_public, created_at, updated_at
            FROM wishlists
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Wishlist::from))
    }

    #[instrument(skip(self))]
    async fn find_public(&self, id: Uuid) -> RepoResult<Option<Wishlist>> {
        let result = sqlx::query_as::<_, WishlistModel>(
            r"
            SELECT id, user_id, title, description, is_public, created_at, updated_at
            FROM wishlists
            WHERE id = $1 AND is_public = TRUE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Wishlist::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Wishlist>> {
        let results = sqlx::query_as::<_, WishlistModel>(
            r"
            SELECT id, user_id, title, description, is_public, created_at, updated_at
            FROM wishlists
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Wishlist::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_owner(&self, id: Uuid) -> RepoResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM wishlists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, wishlist), fields(wishlist_id = %wishlist.id))]
    async fn create(&self, wishlist: &Wishlist) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO wishlists (id, user_id, title, description, is_public, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(wishlist.id)
        .bind(wishlist.user_id)
        .bind(&wishlist.title)
        .bind(&wishlist.description)
        .bind(wishlist.is_public)
        .bind(wishlist.created_at)
        .bind(wishlist.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, wishlist), fields(wishlist_id = %wishlist.id))]
    async fn update(&self, wishlist: &Wishlist) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE wishlists
            SET title = $2, description = $3, is_public = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(wishlist.id)
        .bind(&wishlist.title)
        .bind(&wishlist.description)
        .bind(wishlist.is_public)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(wishlist_not_found(wishlist.id));
        }

        Ok(())
    }

    /// Items and reservations go with it via ON DELETE CASCADE
    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM wishlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(wishlist_not_found(id));
        }

        Ok(())
    }
}
