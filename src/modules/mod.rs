pub mod favorites;

pub use self::favorites::model::{Favorite, FavoriteBook, RemovedFavorite};
