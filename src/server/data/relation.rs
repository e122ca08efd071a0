use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// A (user, recipe) edge table backed by a composite primary key.
///
/// The favorite and shopping cart edges share the exact same shape and toggle
/// discipline; implementing this trait gives them a single generic service.
/// The composite primary key is the store-level uniqueness guarantee the
/// concurrent-add path relies on.
pub trait RecipeEdge {
    /// Human-readable edge name used in error responses
    const EDGE_NAME: &'static str;

    fn exists<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> impl std::future::Future<Output = Result<bool, DbErr>> + Send;

    fn attach<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> impl std::future::Future<Output = Result<(), DbErr>> + Send;

    /// Delete the edge, returning the number of rows removed
    fn detach<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> impl std::future::Future<Output = Result<u64, DbErr>> + Send;
}

impl RecipeEdge for entity::favorite::Entity {
    const EDGE_NAME: &'static str = "favorite";

    async fn exists<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        Ok(entity::prelude::Favorite::find_by_id((user_id, recipe_id))
            .one(db)
            .await?
            .is_some())
    }

    async fn attach<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec(db)
        .await?;

        Ok(())
    }

    async fn detach<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id((user_id, recipe_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}

impl RecipeEdge for entity::shopping_cart_item::Entity {
    const EDGE_NAME: &'static str = "shopping cart item";

    async fn exists<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        Ok(
            entity::prelude::ShoppingCartItem::find_by_id((user_id, recipe_id))
                .one(db)
                .await?
                .is_some(),
        )
    }

    async fn attach<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::ShoppingCartItem::insert(entity::shopping_cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec(db)
        .await?;

        Ok(())
    }

    async fn detach<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::ShoppingCartItem::delete_by_id((user_id, recipe_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::data::relation::RecipeEdge;

    #[tokio::test]
    /// Expect the composite primary key to reject a duplicate favorite pair
    async fn test_duplicate_favorite_insert_fails() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Stew").await?;

        entity::favorite::Entity::attach(&test.db, 1, recipe.id).await?;
        let result = entity::favorite::Entity::attach(&test.db, 1, recipe.id).await;

        assert!(result.is_err());
        assert!(entity::favorite::Entity::exists(&test.db, 1, recipe.id).await?);

        Ok(())
    }

    #[tokio::test]
    /// Expect remove to report zero rows for a missing cart edge
    async fn test_remove_missing_cart_edge_reports_zero() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Stew").await?;

        let removed = entity::shopping_cart_item::Entity::detach(&test.db, 1, recipe.id).await?;

        assert_eq!(removed, 0);

        Ok(())
    }
}
