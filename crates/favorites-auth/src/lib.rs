//! # Favorites Auth
//!
//! Authentication types and JWT utilities for the Favorites API.
//!
//! - [`claims`]: The decoded payload of a verified token
//! - [`jwt`]: Token creation and verification
//!
//! Tokens are HS256-signed with the secret from [`favorites_config::JwtConfig`]
//! and carry the caller's `userId`. The API reads them from a cookie; see the
//! `middleware::auth` module of the server crate.
//!
//! # Example
//!
//! ```ignore
//! use favorites_auth::{create_token, verify_token};
//! use favorites_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(3, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id, 3);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_token, create_token_expiring_in, verify_token};
