pub mod prelude;

pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod recipe_tag;
pub mod shopping_cart_item;
pub mod subscription;
pub mod tag;
pub mod user;
