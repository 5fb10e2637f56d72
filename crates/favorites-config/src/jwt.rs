use std::env;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of issued tokens, in seconds.
    pub token_expiry: i64,
    /// Name of the cookie the token is read from.
    pub cookie_name: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET is not set, using the development secret");
            DEFAULT_SECRET.to_string()
        });

        Self {
            secret,
            token_expiry: crate::parse_or(&lookup, "JWT_EXPIRY", 86400), // 1 day
            cookie_name: lookup("JWT_COOKIE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "token".to_string()),
        }
    }
}
