//! # Favorites Core
//!
//! Foundational types shared by every crate of the Favorites API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use favorites_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Not Found"));
//! ```

pub mod errors;

pub use errors::AppError;
