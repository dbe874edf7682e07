pub mod bookmarks;
pub mod recipe;
pub mod search;
