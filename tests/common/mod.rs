use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use favorites::favorites_auth::create_token;
use favorites::favorites_config::{CorsConfig, JwtConfig};
use favorites::favorites_core::AppError;
use favorites::modules::favorites::{FavoriteBookRow, FavoriteRepository, FavoriteRow};
use favorites::router::init_router;
use favorites::state::AppState;

#[derive(Debug, Clone)]
pub struct TestBook {
    pub id: i64,
    pub title: String,
}

/// In-memory stand-in for the `favorites` and `books` tables.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteRepository {
    books: Vec<TestBook>,
    favorites: Mutex<Vec<FavoriteRow>>,
    next_id: AtomicI64,
}

impl InMemoryFavoriteRepository {
    pub fn with_books(books: &[(i64, &str)]) -> Self {
        Self {
            books: books
                .iter()
                .map(|(id, title)| TestBook {
                    id: *id,
                    title: title.to_string(),
                })
                .collect(),
            favorites: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    #[allow(dead_code)]
    pub fn favorite_count(&self) -> usize {
        self.favorites.lock().unwrap().len()
    }

    /// Inserts a row directly, bypassing the API.
    pub fn seed(&self, book_id: i64, user_id: i64) -> FavoriteRow {
        let now = Utc::now();
        let row = FavoriteRow {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            book_id,
            user_id,
            created_at: now,
            updated_at: now,
        };
        self.favorites.lock().unwrap().push(row.clone());
        row
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn exists_for_book(&self, book_id: i64) -> Result<bool, AppError> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .any(|row| row.book_id == book_id))
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<FavoriteBookRow>, AppError> {
        let favorites = self.favorites.lock().unwrap();
        let mut rows: Vec<FavoriteBookRow> = favorites
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| {
                let book = self.books.iter().find(|book| book.id == row.book_id)?;
                Some(FavoriteBookRow {
                    id: row.id,
                    book_id: row.book_id,
                    user_id: row.user_id,
                    title: book.title.clone(),
                    author: "Unknown".to_string(),
                    genre: "Fiction".to_string(),
                    description: String::new(),
                    cover_url: String::new(),
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                })
            })
            .collect();

        rows.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn insert(&self, book_id: i64, user_id: i64) -> Result<FavoriteRow, AppError> {
        if !self.books.iter().any(|book| book.id == book_id) {
            return Err(AppError::bad_request(anyhow::anyhow!("Book not found")));
        }
        Ok(self.seed(book_id, user_id))
    }

    async fn delete_by_book(
        &self,
        book_id: i64,
        user_id: i64,
    ) -> Result<Option<FavoriteRow>, AppError> {
        let mut favorites = self.favorites.lock().unwrap();
        let (removed, kept): (Vec<FavoriteRow>, Vec<FavoriteRow>) = favorites
            .drain(..)
            .partition(|row| row.book_id == book_id && row.user_id == user_id);
        *favorites = kept;
        Ok(removed.into_iter().min_by_key(|row| row.id))
    }

    async fn delete_by_id(&self, id: i64, user_id: i64) -> Result<Option<FavoriteRow>, AppError> {
        let mut favorites = self.favorites.lock().unwrap();
        let position = favorites
            .iter()
            .position(|row| row.id == id && row.user_id == user_id);
        Ok(position.map(|index| favorites.remove(index)))
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
        cookie_name: "token".to_string(),
    }
}

pub fn token_for(user_id: i64) -> String {
    create_token(user_id, &test_jwt_config()).unwrap()
}

pub fn default_books() -> Vec<(i64, &'static str)> {
    vec![
        (1, "The Left Hand of Darkness"),
        (2, "Dune"),
        (3, "Neuromancer"),
        (7, "A Wizard of Earthsea"),
    ]
}

pub fn test_repo() -> Arc<InMemoryFavoriteRepository> {
    Arc::new(InMemoryFavoriteRepository::with_books(&default_books()))
}

pub fn setup_test_app(repo: Arc<InMemoryFavoriteRepository>) -> axum::Router {
    let state = AppState::new(repo, test_jwt_config(), CorsConfig::default());
    init_router(state)
}

/// Sends a request and returns the status and the JSON body (`Null` when the
/// body is empty or not JSON).
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    match body {
        Some(body) => {
            let raw = serde_json::to_string(&body).unwrap();
            send_raw(app, method, uri, token, Some("application/json"), &raw).await
        }
        None => send_raw(app, method, uri, token, None, "").await,
    }
}

/// Sends `body` verbatim, with `content_type` when given.
#[allow(dead_code)]
pub async fn send_raw(
    app: axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("cookie", format!("token={}", token));
    }
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
