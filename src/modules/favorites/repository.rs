//! Storage for favorites.
//!
//! [`FavoriteRepository`] is the seam between the HTTP layer and the
//! database. [`PgFavoriteRepository`] is the production implementation;
//! deletions are single `DELETE ... RETURNING` statements so a row is
//! reported as removed only by the request that actually removed it.

use std::fmt::Debug;

use async_trait::async_trait;
use sqlx::PgPool;

use favorites_core::AppError;

use super::model::{FavoriteBookRow, FavoriteRow};

#[async_trait]
pub trait FavoriteRepository: Send + Sync + Debug {
    /// Whether any user has favorited `book_id`.
    async fn exists_for_book(&self, book_id: i64) -> Result<bool, AppError>;

    /// The user's favorites joined with their books, ordered by title.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<FavoriteBookRow>, AppError>;

    async fn insert(&self, book_id: i64, user_id: i64) -> Result<FavoriteRow, AppError>;

    /// Deletes every favorite of `user_id` for `book_id`, returning one of the
    /// removed rows, or `None` when nothing matched.
    async fn delete_by_book(
        &self,
        book_id: i64,
        user_id: i64,
    ) -> Result<Option<FavoriteRow>, AppError>;

    /// Deletes the favorite `id` if it belongs to `user_id`.
    async fn delete_by_id(&self, id: i64, user_id: i64) -> Result<Option<FavoriteRow>, AppError>;
}

#[derive(Clone, Debug)]
pub struct PgFavoriteRepository {
    db: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[tracing::instrument(skip(self))]
    async fn exists_for_book(&self, book_id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE book_id = $1)",
        )
        .bind(book_id)
        .fetch_one(&self.db)
        .await?;

        Ok(exists)
    }

    #[tracing::instrument(skip(self))]
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<FavoriteBookRow>, AppError> {
        let rows = sqlx::query_as::<_, FavoriteBookRow>(
            r#"SELECT
                f.id,
                f.book_id,
                f.user_id,
                b.title,
                b.author,
                b.genre,
                b.description,
                b.cover_url,
                f.created_at,
                f.updated_at
               FROM favorites f
               INNER JOIN books b ON b.id = f.book_id
               WHERE f.user_id = $1
               ORDER BY b.title ASC, f.id ASC"#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn insert(&self, book_id: i64, user_id: i64) -> Result<FavoriteRow, AppError> {
        sqlx::query_as::<_, FavoriteRow>(
            r#"INSERT INTO favorites (book_id, user_id)
               VALUES ($1, $2)
               RETURNING id, book_id, user_id, created_at, updated_at"#,
        )
        .bind(book_id)
        .bind(user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("Book not found"));
            }
            AppError::database(e)
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_book(
        &self,
        book_id: i64,
        user_id: i64,
    ) -> Result<Option<FavoriteRow>, AppError> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            r#"DELETE FROM favorites
               WHERE book_id = $1 AND user_id = $2
               RETURNING id, book_id, user_id, created_at, updated_at"#,
        )
        .bind(book_id)
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        if rows.len() > 1 {
            tracing::warn!(book_id, user_id, removed = rows.len(), "Removed duplicate favorites");
        }

        Ok(rows.into_iter().min_by_key(|row| row.id))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: i64, user_id: i64) -> Result<Option<FavoriteRow>, AppError> {
        let row = sqlx::query_as::<_, FavoriteRow>(
            r#"DELETE FROM favorites
               WHERE id = $1 AND user_id = $2
               RETURNING id, book_id, user_id, created_at, updated_at"#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}
