//! End-to-end flow across the service layer: accounts, catalog, recipes,
//! favorites, shopping cart, subscriptions, and the shopping list report.

use platter::model::{
    catalog::IngredientRecordDto,
    recipe::{IngredientAmountDto, RecipeInputDto},
    user::RegisterUserDto,
};
use platter::server::service::{
    ingredient::IngredientService, recipe::RecipeService, relation::ShoppingCartService,
    shopping_list::ShoppingListService, subscription::SubscriptionService, tag::TagService,
    user::UserService,
};
use platter_test_utils::prelude::*;

fn register(email: &str, username: &str) -> RegisterUserDto {
    RegisterUserDto {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}

fn recipe_input(name: &str, ingredients: Vec<(i32, i32)>, tags: Vec<i32>) -> RecipeInputDto {
    RecipeInputDto {
        ingredients: ingredients
            .into_iter()
            .map(|(id, amount)| IngredientAmountDto { id, amount })
            .collect(),
        tags,
        image: "data:image/png;base64,aW1hZ2UgYnl0ZXM=".to_string(),
        name: name.to_string(),
        text: format!("How to cook {}", name),
        cooking_time: 25,
    }
}

#[tokio::test]
async fn test_full_user_journey() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let db = &test.db;

    // Two accounts
    let jane = UserService::new(db)
        .register(&register("jane@example.com", "jane"))
        .await
        .unwrap();
    let john = UserService::new(db)
        .register(&register("john@example.com", "john"))
        .await
        .unwrap();

    // Catalog bootstrap
    let created = IngredientService::new(db)
        .bootstrap(&[
            IngredientRecordDto {
                name: "Salt".to_string(),
                measurement_unit: "g".to_string(),
            },
            IngredientRecordDto {
                name: "Milk".to_string(),
                measurement_unit: "ml".to_string(),
            },
        ])
        .await
        .unwrap();
    assert_eq!(created, 2);

    let dinner = TagService::new(db)
        .create_tag("Dinner", "#E26C2D", "dinner")
        .await
        .unwrap();

    // John publishes two recipes
    let recipe_service = RecipeService::new(db);
    let soup = recipe_service
        .create_recipe(john.id, &recipe_input("Soup", vec![(1, 10)], vec![dinner.id]))
        .await
        .unwrap();
    let bake = recipe_service
        .create_recipe(
            john.id,
            &recipe_input("Bake", vec![(1, 5), (2, 200)], vec![dinner.id]),
        )
        .await
        .unwrap();

    // Jane follows John and fills her cart
    let subscription = SubscriptionService::new(db)
        .subscribe(jane.id, john.id, None)
        .await
        .unwrap();
    assert_eq!(subscription.recipes_count, 2);

    let cart = ShoppingCartService::new(db);
    cart.add(jane.id, soup.id).await.unwrap();
    cart.add(jane.id, bake.id).await.unwrap();

    // The shopping list sums Salt across both recipes
    let report = ShoppingListService::new(db)
        .build_shopping_list(jane.id)
        .await
        .unwrap();
    assert!(report.contains("JANE"));
    assert!(report.contains("Salt - 15/g"));
    assert!(report.contains("Milk - 200/ml"));

    // Jane's view of a recipe reflects her relations
    let viewed = recipe_service
        .get_recipe(Some(jane.id), soup.id)
        .await
        .unwrap();
    assert!(viewed.is_in_shopping_cart);
    assert!(viewed.author.is_subscribed);

    // Dropping a cart item changes the report
    cart.remove(jane.id, bake.id).await.unwrap();
    let report = ShoppingListService::new(db)
        .build_shopping_list(jane.id)
        .await
        .unwrap();
    assert!(report.contains("Salt - 10/g"));
    assert!(!report.contains("Milk"));

    // Deleting a recipe cascades out of the cart
    recipe_service.delete_recipe(john.id, soup.id).await.unwrap();
    let report = ShoppingListService::new(db)
        .build_shopping_list(jane.id)
        .await
        .unwrap();
    assert!(!report.contains("Salt"));

    Ok(())
}
