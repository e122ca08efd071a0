//! Test fixture modules for database row creation.
//!
//! Each submodule provides fixtures for one area of the system:
//!
//! - `user` - user accounts and subscription edges
//! - `catalog` - ingredients and tags
//! - `recipe` - recipes with their composed ingredient/tag rows and edges

pub mod catalog;
pub mod recipe;
pub mod user;
