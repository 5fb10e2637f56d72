use std::sync::Arc;

use anyhow::Context;

use favorites_config::{CorsConfig, JwtConfig, ServerConfig};
use favorites_db::{init_db_pool, run_migrations};

use crate::modules::favorites::{FavoriteRepository, PgFavoriteRepository};

#[derive(Clone, Debug)]
pub struct AppState {
    pub favorites: Arc<dyn FavoriteRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        favorites: Arc<dyn FavoriteRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            favorites,
            jwt_config,
            cors_config,
        }
    }
}

/// Connects to PostgreSQL, applies migrations when enabled, and loads the
/// remaining configuration from the environment.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let database_url = server_config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let db = init_db_pool(database_url, server_config.database_max_connections)
        .await
        .context("Failed to connect to database")?;

    if server_config.run_migrations {
        run_migrations(&db)
            .await
            .context("Failed to run database migrations")?;
    }

    Ok(AppState::new(
        Arc::new(PgFavoriteRepository::new(db)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
