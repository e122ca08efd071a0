//! Pure projection functions from domain models to response DTOs.
//!
//! Write operations return domain entities; projecting them for a given viewer
//! is a separate explicit step so no viewer context leaks into the services.

use crate::model::{
    catalog::{IngredientDto, TagDto},
    recipe::{BriefRecipeDto, RecipeDto, RecipeIngredientDto},
    user::{ProfileDto, SubscriptionDto, UserDto},
};

pub fn user_dto(user: &entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email.clone(),
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

pub fn profile_dto(user: &entity::user::Model, is_subscribed: bool) -> ProfileDto {
    ProfileDto {
        id: user.id,
        email: user.email.clone(),
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        is_subscribed,
    }
}

pub fn ingredient_dto(ingredient: &entity::ingredient::Model) -> IngredientDto {
    IngredientDto {
        id: ingredient.id,
        name: ingredient.name.clone(),
        measurement_unit: ingredient.measurement_unit.clone(),
    }
}

pub fn tag_dto(tag: &entity::tag::Model) -> TagDto {
    TagDto {
        id: tag.id,
        name: tag.name.clone(),
        color: tag.color.clone(),
        slug: tag.slug.clone(),
    }
}

pub fn brief_recipe_dto(recipe: &entity::recipe::Model) -> BriefRecipeDto {
    BriefRecipeDto {
        id: recipe.id,
        name: recipe.name.clone(),
        image: recipe.image.clone(),
        cooking_time: recipe.cooking_time,
    }
}

pub fn recipe_dto(
    recipe: &entity::recipe::Model,
    author: ProfileDto,
    ingredients: &[(entity::recipe_ingredient::Model, entity::ingredient::Model)],
    tags: &[entity::tag::Model],
    is_favorited: bool,
    is_in_shopping_cart: bool,
) -> RecipeDto {
    RecipeDto {
        id: recipe.id,
        tags: tags.iter().map(tag_dto).collect(),
        author,
        ingredients: ingredients
            .iter()
            .map(|(row, ingredient)| RecipeIngredientDto {
                id: ingredient.id,
                name: ingredient.name.clone(),
                measurement_unit: ingredient.measurement_unit.clone(),
                amount: row.amount,
            })
            .collect(),
        is_favorited,
        is_in_shopping_cart,
        name: recipe.name.clone(),
        image: recipe.image.clone(),
        text: recipe.text.clone(),
        cooking_time: recipe.cooking_time,
    }
}

/// A followed author with a recipe sample; the viewer follows them by
/// construction, so `is_subscribed` is always true.
pub fn subscription_dto(
    author: &entity::user::Model,
    recipes: &[entity::recipe::Model],
    recipes_count: u64,
) -> SubscriptionDto {
    SubscriptionDto {
        id: author.id,
        email: author.email.clone(),
        username: author.username.clone(),
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        is_subscribed: true,
        recipes: recipes.iter().map(brief_recipe_dto).collect(),
        recipes_count,
    }
}
