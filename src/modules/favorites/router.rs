use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    check_favorite, create_favorite, delete_favorite, delete_favorite_by_id, get_favorites,
};

pub fn init_favorites_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_favorites)
                .post(create_favorite)
                .delete(delete_favorite),
        )
        .route("/{id}", get(check_favorite).delete(delete_favorite_by_id))
}
