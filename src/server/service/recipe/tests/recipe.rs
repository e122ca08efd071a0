use std::collections::HashSet;

use platter_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{
    model::recipe::{IngredientAmountDto, RecipeFilterDto, RecipeInputDto},
    server::{
        error::{auth::AuthError, composition::CompositionError, relation::RelationError, Error},
        service::recipe::RecipeService,
    },
};

fn input(
    name: &str,
    ingredients: Vec<(i32, i32)>,
    tags: Vec<i32>,
) -> RecipeInputDto {
    RecipeInputDto {
        ingredients: ingredients
            .into_iter()
            .map(|(id, amount)| IngredientAmountDto { id, amount })
            .collect(),
        tags,
        image: "data:image/png;base64,aW1hZ2UgYnl0ZXM=".to_string(),
        name: name.to_string(),
        text: format!("How to cook {}", name),
        cooking_time: 30,
    }
}

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_core_tables()
        .with_user("jane")
        .with_user("john")
        .with_ingredient("Salt", "g")
        .with_ingredient("Pepper", "g")
        .with_ingredient("Milk", "ml")
        .with_tag("Dinner", "#E26C2D", "dinner")
        .with_tag("Lunch", "#49B64E", "lunch")
        .build()
        .await
}

#[tokio::test]
/// Expect the persisted composition to equal the submitted sets exactly
async fn test_create_recipe_persists_exact_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let service = RecipeService::new(&test.db);

    let result = service
        .create_recipe(1, &input("Stew", vec![(1, 10), (3, 200)], vec![1, 2]))
        .await;

    assert!(result.is_ok());
    let recipe = result.unwrap();

    let persisted_ingredients: HashSet<(i32, i32)> = recipe
        .ingredients
        .iter()
        .map(|i| (i.id, i.amount))
        .collect();
    assert_eq!(persisted_ingredients, HashSet::from([(1, 10), (3, 200)]));

    let persisted_tags: HashSet<i32> = recipe.tags.iter().map(|t| t.id).collect();
    assert_eq!(persisted_tags, HashSet::from([1, 2]));

    assert_eq!(recipe.author.id, 1);
    assert_eq!(recipe.cooking_time, 30);
    assert!(recipe.image.starts_with("recipes/images/"));

    Ok(())
}

#[tokio::test]
/// Expect a failed validation to persist no recipe or join rows
async fn test_create_recipe_duplicate_persists_nothing() -> Result<(), TestError> {
    let test = setup().await?;
    let service = RecipeService::new(&test.db);

    let result = service
        .create_recipe(1, &input("Stew", vec![(1, 10), (1, 5)], vec![1]))
        .await;

    assert!(matches!(
        result,
        Err(Error::CompositionError(
            CompositionError::DuplicateIngredient(1)
        ))
    ));

    let recipes = entity::prelude::Recipe::find().all(&test.db).await?;
    assert!(recipes.is_empty());

    let rows = entity::prelude::RecipeIngredient::find().all(&test.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect update to fully replace the old composition with no leftovers
async fn test_update_recipe_replaces_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let service = RecipeService::new(&test.db);

    let created = service
        .create_recipe(1, &input("Stew", vec![(1, 10), (2, 5)], vec![1]))
        .await?;

    let mut replacement = input("Milky stew", vec![(3, 250)], vec![2]);
    replacement.cooking_time = 45;

    let updated = service.update_recipe(1, created.id, &replacement).await?;

    assert_eq!(updated.name, "Milky stew");
    assert_eq!(updated.cooking_time, 45);
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].id, 3);
    assert_eq!(updated.ingredients[0].amount, 250);
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].id, 2);

    // No join rows from the old composition may survive the replace
    let rows = entity::prelude::RecipeIngredient::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    let tag_rows = entity::prelude::RecipeTag::find().all(&test.db).await?;
    assert_eq!(tag_rows.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect a failed update validation to leave the old composition intact
async fn test_update_recipe_invalid_input_keeps_old_sets() -> Result<(), TestError> {
    let test = setup().await?;
    let service = RecipeService::new(&test.db);

    let created = service
        .create_recipe(1, &input("Stew", vec![(1, 10)], vec![1]))
        .await?;

    let result = service
        .update_recipe(1, created.id, &input("Stew", vec![(42, 1)], vec![1]))
        .await;

    assert!(matches!(
        result,
        Err(Error::CompositionError(
            CompositionError::UnknownIngredient(42)
        ))
    ));

    let unchanged = service.get_recipe(Some(1), created.id).await?;
    assert_eq!(unchanged.ingredients.len(), 1);
    assert_eq!(unchanged.ingredients[0].id, 1);

    Ok(())
}

#[tokio::test]
/// Expect update and delete by a non-author to be forbidden
async fn test_author_only_write_access() -> Result<(), TestError> {
    let test = setup().await?;
    let service = RecipeService::new(&test.db);

    let created = service
        .create_recipe(1, &input("Stew", vec![(1, 10)], vec![1]))
        .await?;

    let update = service
        .update_recipe(2, created.id, &input("Theft", vec![(1, 1)], vec![1]))
        .await;
    assert!(matches!(
        update,
        Err(Error::AuthError(AuthError::NotRecipeAuthor { .. }))
    ));

    let delete = service.delete_recipe(2, created.id).await;
    assert!(matches!(
        delete,
        Err(Error::AuthError(AuthError::NotRecipeAuthor { .. }))
    ));

    // The author still can
    let result = service.delete_recipe(1, created.id).await;
    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect a missing recipe to be reported as not found
async fn test_get_missing_recipe_fails() -> Result<(), TestError> {
    let test = setup().await?;
    let service = RecipeService::new(&test.db);

    let result = service.get_recipe(None, 99).await;

    assert!(matches!(
        result,
        Err(Error::RelationError(RelationError::RecipeNotFound(99)))
    ));

    Ok(())
}

#[tokio::test]
/// Expect viewer-dependent flags in the projection
async fn test_projection_viewer_flags() -> Result<(), TestError> {
    let mut test = setup().await?;
    let service = RecipeService::new(&test.db);

    let created = service
        .create_recipe(2, &input("Stew", vec![(1, 10)], vec![1]))
        .await?;

    test.recipes().insert_favorite(1, created.id).await?;
    test.users().insert_subscription(1, 2).await?;

    let viewed = service.get_recipe(Some(1), created.id).await?;
    assert!(viewed.is_favorited);
    assert!(!viewed.is_in_shopping_cart);
    assert!(viewed.author.is_subscribed);

    let anonymous = service.get_recipe(None, created.id).await?;
    assert!(!anonymous.is_favorited);
    assert!(!anonymous.author.is_subscribed);

    Ok(())
}

#[tokio::test]
/// Expect list filters to combine author and viewer-dependent predicates
async fn test_list_recipes_filters() -> Result<(), TestError> {
    let mut test = setup().await?;
    let service = RecipeService::new(&test.db);

    let by_jane = service
        .create_recipe(1, &input("Stew", vec![(1, 10)], vec![1]))
        .await?;
    let by_john = service
        .create_recipe(2, &input("Soup", vec![(2, 5)], vec![2]))
        .await?;

    test.recipes().insert_cart_item(1, by_john.id).await?;

    let by_author = service
        .list_recipes(
            None,
            &RecipeFilterDto {
                author: Some(1),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id, by_jane.id);

    let in_cart = service
        .list_recipes(
            Some(1),
            &RecipeFilterDto {
                is_in_shopping_cart: Some(true),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(in_cart.len(), 1);
    assert_eq!(in_cart[0].id, by_john.id);

    // Without a viewer the cart filter has nothing to apply to
    let anonymous = service
        .list_recipes(
            None,
            &RecipeFilterDto {
                is_in_shopping_cart: Some(true),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(anonymous.len(), 2);

    Ok(())
}
