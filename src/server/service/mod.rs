//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic, coordinates
//! between repositories, and handles complex multi-step operations. Services include
//! recipe composition and writes, the favorite/shopping cart/subscription toggles,
//! shopping list aggregation, the ingredient/tag catalog, and user accounts.

pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod shopping_list;
pub mod subscription;
pub mod tag;
pub mod user;
