pub mod api;
pub mod catalog;
pub mod recipe;
pub mod user;
