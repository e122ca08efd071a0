use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn recipes(&self) -> RecipeFixtures<'_> {
        RecipeFixtures { setup: self }
    }
}

pub struct RecipeFixtures<'a> {
    setup: &'a TestContext,
}

impl RecipeFixtures<'_> {
    /// Insert a bare recipe row without ingredient or tag associations.
    pub async fn insert_recipe(
        &self,
        author_id: i32,
        name: &str,
    ) -> Result<entity::recipe::Model, TestError> {
        Ok(entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(name.to_string()),
            image: ActiveValue::Set("data:image/png;base64,aW1n".to_string()),
            text: ActiveValue::Set(format!("How to cook {}", name)),
            cooking_time: ActiveValue::Set(10),
            pub_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a recipe together with its ingredient amounts and tags.
    pub async fn insert_composed_recipe(
        &self,
        author_id: i32,
        name: &str,
        ingredients: &[(i32, i32)],
        tag_ids: &[i32],
    ) -> Result<entity::recipe::Model, TestError> {
        let recipe = self.insert_recipe(author_id, name).await?;

        for (ingredient_id, amount) in ingredients {
            entity::prelude::RecipeIngredient::insert(entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
                amount: ActiveValue::Set(*amount),
            })
            .exec(&self.setup.db)
            .await?;
        }

        for tag_id in tag_ids {
            entity::prelude::RecipeTag::insert(entity::recipe_tag::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                tag_id: ActiveValue::Set(*tag_id),
            })
            .exec(&self.setup.db)
            .await?;
        }

        Ok(recipe)
    }

    pub async fn insert_favorite(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_cart_item(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::shopping_cart_item::Model, TestError> {
        Ok(
            entity::prelude::ShoppingCartItem::insert(entity::shopping_cart_item::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
