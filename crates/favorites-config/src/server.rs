use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database_max_connections: u32,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: crate::parse_or(&lookup, "PORT", 3000),
            database_max_connections: crate::parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            run_migrations: crate::parse_or(&lookup, "RUN_MIGRATIONS", true),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
