pub mod composition;
pub mod projection;

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::recipe::{RecipeDto, RecipeFilterDto, RecipeInputDto},
    server::{
        data::{
            recipe::{RecipeListFilter, RecipeRepository},
            relation::RecipeEdge,
            subscription::SubscriptionRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, relation::RelationError, Error},
        service::recipe::composition::CompositionValidator,
    },
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate and persist a new recipe in a single transaction.
    ///
    /// The recipe row, its ingredient amounts, and its tag links all land
    /// together or not at all.
    pub async fn create_recipe(
        &self,
        author_id: i32,
        input: &RecipeInputDto,
    ) -> Result<RecipeDto, Error> {
        let composition = CompositionValidator::new(self.db).validate(input).await?;

        let txn = self.db.begin().await?;

        let recipe = {
            let repo = RecipeRepository::new(&txn);

            let recipe = repo
                .create(
                    author_id,
                    &input.name,
                    &composition.image_reference,
                    &input.text,
                    composition.cooking_time,
                )
                .await?;

            let ingredient_amounts = composition
                .ingredients
                .iter()
                .map(|(model, amount)| (model.id, *amount))
                .collect::<Vec<_>>();
            repo.insert_ingredients(recipe.id, &ingredient_amounts)
                .await?;

            let tag_ids = composition.tags.iter().map(|t| t.id).collect::<Vec<_>>();
            repo.insert_tags(recipe.id, &tag_ids).await?;

            recipe
        };

        txn.commit().await?;

        self.get_recipe(Some(author_id), recipe.id).await
    }

    /// Replace a recipe's scalars and its full ingredient/tag sets.
    ///
    /// Only the author may update. The previous composition is deleted and the
    /// new one inserted inside one transaction; no partial replacement is
    /// observable.
    pub async fn update_recipe(
        &self,
        acting_user: i32,
        recipe_id: i32,
        input: &RecipeInputDto,
    ) -> Result<RecipeDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .get(recipe_id)
            .await?
            .ok_or(RelationError::RecipeNotFound(recipe_id))?;

        if recipe.author_id != acting_user {
            return Err(AuthError::NotRecipeAuthor {
                user_id: acting_user,
                recipe_id,
            }
            .into());
        }

        let composition = CompositionValidator::new(self.db).validate(input).await?;

        let txn = self.db.begin().await?;

        {
            let repo = RecipeRepository::new(&txn);

            repo.update_scalars(
                recipe_id,
                &input.name,
                &composition.image_reference,
                &input.text,
                composition.cooking_time,
            )
            .await?;

            repo.clear_ingredients(recipe_id).await?;
            repo.clear_tags(recipe_id).await?;

            let ingredient_amounts = composition
                .ingredients
                .iter()
                .map(|(model, amount)| (model.id, *amount))
                .collect::<Vec<_>>();
            repo.insert_ingredients(recipe_id, &ingredient_amounts)
                .await?;

            let tag_ids = composition.tags.iter().map(|t| t.id).collect::<Vec<_>>();
            repo.insert_tags(recipe_id, &tag_ids).await?;
        }

        txn.commit().await?;

        self.get_recipe(Some(acting_user), recipe_id).await
    }

    /// Delete a recipe; only the author may delete
    pub async fn delete_recipe(&self, acting_user: i32, recipe_id: i32) -> Result<(), Error> {
        let repo = RecipeRepository::new(self.db);

        let recipe = repo
            .get(recipe_id)
            .await?
            .ok_or(RelationError::RecipeNotFound(recipe_id))?;

        if recipe.author_id != acting_user {
            return Err(AuthError::NotRecipeAuthor {
                user_id: acting_user,
                recipe_id,
            }
            .into());
        }

        repo.delete(recipe_id).await?;

        Ok(())
    }

    pub async fn get_recipe(&self, viewer: Option<i32>, recipe_id: i32) -> Result<RecipeDto, Error> {
        let recipe = RecipeRepository::new(self.db)
            .get(recipe_id)
            .await?
            .ok_or(RelationError::RecipeNotFound(recipe_id))?;

        self.project(viewer, &recipe).await
    }

    /// List recipes for the viewer, applying the query filters.
    ///
    /// The favorited and shopping cart filters need a viewer identity; without
    /// one they are ignored.
    pub async fn list_recipes(
        &self,
        viewer: Option<i32>,
        filter: &RecipeFilterDto,
    ) -> Result<Vec<RecipeDto>, Error> {
        let tag_slugs = filter.tags.as_ref().map(|tags| {
            tags.split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let resolved = RecipeListFilter {
            author_id: filter.author,
            tag_slugs: tag_slugs.filter(|slugs| !slugs.is_empty()),
            favorited_by: viewer.filter(|_| filter.is_favorited == Some(true)),
            in_cart_of: viewer.filter(|_| filter.is_in_shopping_cart == Some(true)),
            limit: filter.limit,
        };

        let recipes = RecipeRepository::new(self.db).list(&resolved).await?;

        let mut dtos = Vec::with_capacity(recipes.len());
        for recipe in &recipes {
            dtos.push(self.project(viewer, recipe).await?);
        }

        Ok(dtos)
    }

    async fn project(
        &self,
        viewer: Option<i32>,
        recipe: &entity::recipe::Model,
    ) -> Result<RecipeDto, Error> {
        let repo = RecipeRepository::new(self.db);

        let ingredients = repo.get_ingredients(recipe.id).await?;
        let tags = repo.get_tags(recipe).await?;

        let author = UserRepository::new(self.db)
            .get(recipe.author_id)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!(
                    "Author ID {} missing for recipe ID {}",
                    recipe.author_id, recipe.id
                ))
            })?;

        let (is_subscribed, is_favorited, is_in_shopping_cart) = match viewer {
            Some(viewer_id) => (
                viewer_id != author.id
                    && SubscriptionRepository::new(self.db)
                        .exists(viewer_id, author.id)
                        .await?,
                entity::favorite::Entity::exists(self.db, viewer_id, recipe.id).await?,
                entity::shopping_cart_item::Entity::exists(self.db, viewer_id, recipe.id).await?,
            ),
            None => (false, false, false),
        };

        Ok(projection::recipe_dto(
            recipe,
            projection::profile_dto(&author, is_subscribed),
            &ingredients,
            &tags,
            is_favorited,
            is_in_shopping_cart,
        ))
    }
}
