//! # Favorites Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token secret, lifetime and the cookie carrying it
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address and startup behaviour
//!
//! Every config is built once at startup and handed to the application
//! state; nothing reads the environment per request.
//!
//! # Example
//!
//! ```ignore
//! use favorites_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads a variable and parses it, falling back to `default` when it is
/// missing or malformed.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring malformed configuration value");
            default
        }),
        None => default,
    }
}
