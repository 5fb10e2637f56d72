use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use favorites_core::AppError;

/// A row of the `favorites` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FavoriteRow {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A favorite joined with the book it references.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FavoriteBookRow {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub cover_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The data of a deleted favorite. Carries no `id`: the row no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemovedFavorite {
    pub book_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBook {
    /// Identifier of the favorite, not of the book
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub cover_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        Self {
            id: row.id,
            book_id: row.book_id,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<FavoriteRow> for RemovedFavorite {
    fn from(row: FavoriteRow) -> Self {
        Self {
            book_id: row.book_id,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<FavoriteBookRow> for FavoriteBook {
    fn from(row: FavoriteBookRow) -> Self {
        Self {
            id: row.id,
            book_id: row.book_id,
            user_id: row.user_id,
            title: row.title,
            author: row.author,
            genre: row.genre,
            description: row.description,
            cover_url: row.cover_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Body of `POST /favorites`.
///
/// Only `bookId` is read. Any `id` or `userId` sent by the client is
/// ignored; the owner always comes from the verified token.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteDto {
    /// Integer, or a string holding one
    #[schema(value_type = i64)]
    pub book_id: Option<Value>,
}

impl CreateFavoriteDto {
    pub fn book_id(&self) -> Result<i64, AppError> {
        let parsed = match &self.book_id {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };

        parsed.ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Book ID must be an integer")))
    }
}

/// Body of `DELETE /favorites`. Unlike creation, `bookId` must be a JSON
/// integer; numeric strings and fractions are refused.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFavoriteDto {
    #[schema(value_type = i64)]
    pub book_id: Option<Value>,
}

impl DeleteFavoriteDto {
    pub fn book_id(&self) -> Result<i64, AppError> {
        let parsed = match &self.book_id {
            Some(Value::Number(n)) => n.as_i64(),
            _ => None,
        };

        parsed.ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Book ID must be an integer")))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FavoriteCheckParams {
    /// Book to look for
    #[param(value_type = i64)]
    pub book_id: Option<String>,
}

impl FavoriteCheckParams {
    pub fn book_id(&self) -> Result<i64, AppError> {
        self.book_id
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Book ID must be an integer")))
    }
}

pub fn parse_favorite_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::bad_request(anyhow::anyhow!("Favorite ID must be an integer")))
}
