use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::recipe::BriefRecipeDto,
    server::{
        data::{recipe::RecipeRepository, relation::RecipeEdge},
        error::{relation::RelationError, Error},
        service::recipe::projection,
    },
};

/// Toggle service shared by the favorite and shopping cart edges.
///
/// Adding is idempotent in outcome only: a second add for the same pair is an
/// explicit error rather than a silent no-op, and concurrent adds are decided
/// by the edge table's composite primary key.
pub struct EdgeService<'a, E: RecipeEdge> {
    db: &'a DatabaseConnection,
    edge: PhantomData<E>,
}

pub type FavoriteService<'a> = EdgeService<'a, entity::favorite::Entity>;
pub type ShoppingCartService<'a> = EdgeService<'a, entity::shopping_cart_item::Entity>;

impl<'a, E: RecipeEdge> EdgeService<'a, E> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            edge: PhantomData,
        }
    }

    pub async fn add(&self, user_id: i32, recipe_id: i32) -> Result<BriefRecipeDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .get(recipe_id)
            .await?
            .ok_or(RelationError::RecipeNotFound(recipe_id))?;

        if E::exists(self.db, user_id, recipe_id).await? {
            return Err(Self::already_exists(user_id, recipe_id).into());
        }

        if let Err(e) = E::attach(self.db, user_id, recipe_id).await {
            return match e.sql_err() {
                // A concurrent add won the race between the exists check and the insert
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(Self::already_exists(user_id, recipe_id).into())
                }
                _ => Err(e.into()),
            };
        }

        Ok(projection::brief_recipe_dto(&recipe))
    }

    pub async fn remove(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        if RecipeRepository::new(self.db).get(recipe_id).await?.is_none() {
            return Err(RelationError::RecipeNotFound(recipe_id).into());
        }

        let removed = E::detach(self.db, user_id, recipe_id).await?;

        if removed == 0 {
            return Err(RelationError::EdgeNotFound {
                edge: E::EDGE_NAME,
                user_id,
                target_id: recipe_id,
            }
            .into());
        }

        Ok(())
    }

    fn already_exists(user_id: i32, recipe_id: i32) -> RelationError {
        RelationError::AlreadyExists {
            edge: E::EDGE_NAME,
            user_id,
            target_id: recipe_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::{
        error::{relation::RelationError, Error},
        service::relation::{FavoriteService, ShoppingCartService},
    };

    #[tokio::test]
    /// Expect add to return the recipe's brief projection
    async fn test_add_favorite_success() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Stew").await?;
        let service = FavoriteService::new(&test.db);

        let result = service.add(1, recipe.id).await;

        assert!(result.is_ok());
        let brief = result.unwrap();

        assert_eq!(brief.id, recipe.id);
        assert_eq!(brief.name, "Stew");

        Ok(())
    }

    #[tokio::test]
    /// Expect a second add of the same pair to fail as AlreadyExists
    async fn test_add_favorite_twice_fails() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Stew").await?;
        let service = FavoriteService::new(&test.db);

        service.add(1, recipe.id).await?;
        let result = service.add(1, recipe.id).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::AlreadyExists { .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect adding an edge for a missing recipe to fail as RecipeNotFound
    async fn test_add_missing_recipe_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let service = ShoppingCartService::new(&test.db);
        let result = service.add(1, 99).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::RecipeNotFound(99)))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect removing a missing edge to fail as EdgeNotFound
    async fn test_remove_missing_edge_fails() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Stew").await?;
        let service = ShoppingCartService::new(&test.db);

        let result = service.remove(1, recipe.id).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::EdgeNotFound { .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect remove then add to work as a full toggle cycle
    async fn test_toggle_cycle() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Stew").await?;
        let service = ShoppingCartService::new(&test.db);

        service.add(1, recipe.id).await?;
        service.remove(1, recipe.id).await?;
        let result = service.add(1, recipe.id).await;

        assert!(result.is_ok());

        Ok(())
    }
}
