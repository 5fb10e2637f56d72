use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::favorites::model::{
    CreateFavoriteDto, DeleteFavoriteDto, Favorite, FavoriteBook, RemovedFavorite,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::favorites::controller::check_favorite,
        crate::modules::favorites::controller::get_favorites,
        crate::modules::favorites::controller::create_favorite,
        crate::modules::favorites::controller::delete_favorite,
        crate::modules::favorites::controller::delete_favorite_by_id,
    ),
    components(
        schemas(
            Favorite,
            FavoriteBook,
            RemovedFavorite,
            CreateFavoriteDto,
            DeleteFavoriteDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Favorites", description = "Books the signed-in user has favorited")
    ),
    info(
        title = "Favorites API",
        version = "0.1.0",
        description = "Favorite books, authorized by the `token` cookie"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_favorite_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/favorites"));
        assert!(doc.paths.paths.contains_key("/favorites/{id}"));
    }

    #[test]
    fn test_openapi_has_cookie_security() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("cookie_auth"));
    }
}
