use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use favorites_core::AppError;

use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::modules::favorites::model::{
    CreateFavoriteDto, DeleteFavoriteDto, Favorite, FavoriteBook, FavoriteCheckParams,
    RemovedFavorite, parse_favorite_id,
};
use crate::modules::favorites::service::FavoriteService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/favorites/{id}",
    params(
        ("id" = String, Path, description = "Ignored; kept for client compatibility"),
        FavoriteCheckParams
    ),
    responses(
        (status = 200, description = "Whether any favorite references the book", body = bool),
        (status = 400, description = "bookId is not an integer"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Favorites",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn check_favorite(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(_id): Path<String>,
    Query(params): Query<FavoriteCheckParams>,
) -> Result<Json<bool>, AppError> {
    let book_id = params.book_id()?;

    let exists = FavoriteService::is_favorited(state.favorites.as_ref(), book_id).await?;

    Ok(Json(exists))
}

#[utoipa::path(
    get,
    path = "/favorites",
    responses(
        (status = 200, description = "The caller's favorites ordered by book title", body = Vec<FavoriteBook>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Favorites",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_favorites(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<FavoriteBook>>, AppError> {
    let favorites =
        FavoriteService::list_favorites(state.favorites.as_ref(), auth_user.user_id()).await?;

    Ok(Json(favorites))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "bookId is not an integer or the book does not exist"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Favorites",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_favorite(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(dto): JsonBody<CreateFavoriteDto>,
) -> Result<(StatusCode, Json<Favorite>), AppError> {
    let book_id = dto.book_id()?;

    let favorite =
        FavoriteService::create_favorite(state.favorites.as_ref(), auth_user.user_id(), book_id)
            .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/favorites",
    request_body = DeleteFavoriteDto,
    responses(
        (status = 200, description = "Favorite removed", body = RemovedFavorite),
        (status = 400, description = "bookId is not an integer"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "The caller has not favorited this book")
    ),
    tag = "Favorites",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_favorite(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(dto): JsonBody<DeleteFavoriteDto>,
) -> Result<Json<RemovedFavorite>, AppError> {
    let book_id = dto.book_id()?;

    let removed =
        FavoriteService::remove_by_book(state.favorites.as_ref(), auth_user.user_id(), book_id)
            .await?;

    Ok(Json(removed))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(
        ("id" = i64, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = RemovedFavorite),
        (status = 400, description = "id is not an integer"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No favorite with this id belongs to the caller")
    ),
    tag = "Favorites",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_favorite_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<RemovedFavorite>, AppError> {
    let favorite_id = parse_favorite_id(&id)?;

    let removed =
        FavoriteService::remove_by_id(state.favorites.as_ref(), auth_user.user_id(), favorite_id)
            .await?;

    Ok(Json(removed))
}
