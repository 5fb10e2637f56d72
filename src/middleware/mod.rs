//! Middleware for request processing.
//!
//! - [`auth`]: Cookie token verification and the [`auth::AuthUser`] extractor
//!
//! # Authentication Flow
//!
//! 1. Client sends the request with the `token` cookie set
//! 2. [`auth::authorize`] verifies the JWT and stores its claims
//! 3. Handlers take [`auth::AuthUser`] to read the caller's `userId`
//!
//! ```ignore
//! async fn get_favorites(auth_user: AuthUser) -> impl IntoResponse {
//!     let user_id = auth_user.user_id();
//!     // ...
//! }
//! ```

pub mod auth;
