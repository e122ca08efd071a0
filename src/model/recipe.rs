use serde::{Deserialize, Serialize};

use crate::model::{catalog::TagDto, user::ProfileDto};

/// An ingredient line within a recipe, resolved to its catalog entry
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeIngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub tags: Vec<TagDto>,
    pub author: ProfileDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

/// Compact recipe representation used for favorites, carts, and subscriptions
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BriefRecipeDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// An ingredient reference with its amount as submitted by a recipe author
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientAmountDto {
    pub id: i32,
    pub amount: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeInputDto {
    pub ingredients: Vec<IngredientAmountDto>,
    pub tags: Vec<i32>,
    pub image: String,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
}

/// Query filters for recipe listing
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct RecipeFilterDto {
    /// Only recipes by this author
    pub author: Option<i32>,
    /// Comma-separated tag slugs; recipes matching any listed slug are included
    pub tags: Option<String>,
    /// Only recipes the current user has favorited
    pub is_favorited: Option<bool>,
    /// Only recipes in the current user's shopping cart
    pub is_in_shopping_cart: Option<bool>,
    /// Maximum number of recipes to return
    pub limit: Option<u64>,
}

/// Query parameter capping recipes returned per subscription entry
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct RecipesLimitDto {
    pub recipes_limit: Option<u64>,
}
