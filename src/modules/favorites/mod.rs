pub mod controller;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;

pub use model::*;
pub use repository::{FavoriteRepository, PgFavoriteRepository};
pub use router::init_favorites_router;
