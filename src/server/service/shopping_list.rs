use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recipe::RecipeRepository, user::UserRepository},
    error::{auth::AuthError, Error},
};

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Build the consolidated shopping list report for a user's cart.
    ///
    /// Ingredient amounts are summed across every recipe in the cart, grouped
    /// by (name, measurement unit) and ordered by name. The report carries a
    /// header with the date, time, and upper-cased username; an empty cart
    /// yields the header alone.
    pub async fn build_shopping_list(&self, user_id: i32) -> Result<String, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        let totals = RecipeRepository::new(self.db)
            .sum_shopping_cart(user_id)
            .await?;

        let now = Utc::now();
        let mut report = format!(
            "Shopping list for {} ({} at {})\n",
            user.username.to_uppercase(),
            now.format("%d/%m/%Y"),
            now.format("%H:%M"),
        );

        for (name, measurement_unit, total_amount) in totals {
            report.push_str(&format!(
                "{} - {}/{}\n",
                name, total_amount, measurement_unit
            ));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::service::shopping_list::ShoppingListService;

    #[tokio::test]
    /// Expect the same ingredient across recipes to be summed into one line
    async fn test_shopping_list_sums_across_recipes() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_tag("Dinner", "#E26C2D", "dinner")
            .build()
            .await?;

        let soup = test
            .recipes()
            .insert_composed_recipe(1, "Soup", &[(1, 10)], &[1])
            .await?;
        let stew = test
            .recipes()
            .insert_composed_recipe(1, "Stew", &[(1, 5)], &[1])
            .await?;

        test.recipes().insert_cart_item(1, soup.id).await?;
        test.recipes().insert_cart_item(1, stew.id).await?;

        let service = ShoppingListService::new(&test.db);
        let report = service.build_shopping_list(1).await?;

        assert!(report.contains("JANE"));
        assert!(report.contains("Salt - 15/g"));
        assert_eq!(report.matches("Salt").count(), 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect distinct (name, unit) pairs to stay separate, ordered by name
    async fn test_shopping_list_groups_by_name_and_unit() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_ingredient("Salt", "tbsp")
            .with_ingredient("Milk", "ml")
            .build()
            .await?;

        let recipe = test
            .recipes()
            .insert_composed_recipe(1, "Bake", &[(1, 10), (2, 1), (3, 200)], &[])
            .await?;
        test.recipes().insert_cart_item(1, recipe.id).await?;

        let service = ShoppingListService::new(&test.db);
        let report = service.build_shopping_list(1).await?;

        assert!(report.contains("Salt - 10/g"));
        assert!(report.contains("Salt - 1/tbsp"));
        assert!(report.contains("Milk - 200/ml"));

        let milk_position = report.find("Milk").unwrap();
        let salt_position = report.find("Salt").unwrap();
        assert!(milk_position < salt_position);

        Ok(())
    }

    #[tokio::test]
    /// Expect an empty cart to yield the header alone
    async fn test_shopping_list_empty_cart() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let service = ShoppingListService::new(&test.db);
        let report = service.build_shopping_list(1).await?;

        assert!(report.starts_with("Shopping list for JANE"));
        assert_eq!(report.lines().count(), 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect recipes outside the cart to not contribute to the report
    async fn test_shopping_list_ignores_recipes_outside_cart() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_ingredient("Milk", "ml")
            .build()
            .await?;

        let in_cart = test
            .recipes()
            .insert_composed_recipe(1, "Soup", &[(1, 10)], &[])
            .await?;
        let _outside = test
            .recipes()
            .insert_composed_recipe(1, "Bake", &[(2, 200)], &[])
            .await?;

        test.recipes().insert_cart_item(1, in_cart.id).await?;

        let service = ShoppingListService::new(&test.db);
        let report = service.build_shopping_list(1).await?;

        assert!(report.contains("Salt - 10/g"));
        assert!(!report.contains("Milk"));

        Ok(())
    }
}
