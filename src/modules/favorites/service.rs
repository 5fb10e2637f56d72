use tracing::instrument;

use favorites_core::AppError;

use super::model::{Favorite, FavoriteBook, RemovedFavorite};
use super::repository::FavoriteRepository;

pub struct FavoriteService;

impl FavoriteService {
    /// Reports whether any user has favorited the book. The check is not
    /// scoped to the caller.
    #[instrument(skip(repo))]
    pub async fn is_favorited(repo: &dyn FavoriteRepository, book_id: i64) -> Result<bool, AppError> {
        repo.exists_for_book(book_id).await
    }

    #[instrument(skip(repo))]
    pub async fn list_favorites(
        repo: &dyn FavoriteRepository,
        user_id: i64,
    ) -> Result<Vec<FavoriteBook>, AppError> {
        let rows = repo.list_for_user(user_id).await?;
        Ok(rows.into_iter().map(FavoriteBook::from).collect())
    }

    #[instrument(skip(repo))]
    pub async fn create_favorite(
        repo: &dyn FavoriteRepository,
        user_id: i64,
        book_id: i64,
    ) -> Result<Favorite, AppError> {
        let row = repo.insert(book_id, user_id).await?;
        tracing::info!(favorite_id = row.id, book_id, user_id, "Favorite created");
        Ok(row.into())
    }

    #[instrument(skip(repo))]
    pub async fn remove_by_book(
        repo: &dyn FavoriteRepository,
        user_id: i64,
        book_id: i64,
    ) -> Result<RemovedFavorite, AppError> {
        let row = repo
            .delete_by_book(book_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Not Found")))?;

        tracing::info!(favorite_id = row.id, book_id, user_id, "Favorite removed");
        Ok(row.into())
    }

    #[instrument(skip(repo))]
    pub async fn remove_by_id(
        repo: &dyn FavoriteRepository,
        user_id: i64,
        favorite_id: i64,
    ) -> Result<RemovedFavorite, AppError> {
        let row = repo
            .delete_by_id(favorite_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Not Found")))?;

        tracing::info!(favorite_id, book_id = row.book_id, user_id, "Favorite removed");
        Ok(row.into())
    }
}
