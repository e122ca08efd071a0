use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Resolved filters for recipe listing; viewer-dependent filters carry the
/// viewer's user ID explicitly.
#[derive(Debug, Default)]
pub struct RecipeListFilter {
    pub author_id: Option<i32>,
    pub tag_slugs: Option<Vec<String>>,
    pub favorited_by: Option<i32>,
    pub in_cart_of: Option<i32>,
    pub limit: Option<u64>,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        author_id: i32,
        name: &str,
        image: &str,
        text: &str,
        cooking_time: i32,
    ) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(name.to_string()),
            image: ActiveValue::Set(image.to_string()),
            text: ActiveValue::Set(text.to_string()),
            cooking_time: ActiveValue::Set(cooking_time),
            pub_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    pub async fn update_scalars(
        &self,
        recipe_id: i32,
        name: &str,
        image: &str,
        text: &str,
        cooking_time: i32,
    ) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            id: ActiveValue::Unchanged(recipe_id),
            name: ActiveValue::Set(name.to_string()),
            image: ActiveValue::Set(image.to_string()),
            text: ActiveValue::Set(text.to_string()),
            cooking_time: ActiveValue::Set(cooking_time),
            ..Default::default()
        };

        recipe.update(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find_by_id(id).one(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Recipe::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn list(
        &self,
        filter: &RecipeListFilter,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        let mut query =
            entity::prelude::Recipe::find().order_by_desc(entity::recipe::Column::PubDate);

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if let Some(slugs) = &filter.tag_slugs {
            query = query
                .join(JoinType::InnerJoin, entity::recipe::Relation::RecipeTag.def())
                .join(JoinType::InnerJoin, entity::recipe_tag::Relation::Tag.def())
                .filter(entity::tag::Column::Slug.is_in(slugs.clone()))
                .distinct();
        }

        if let Some(user_id) = filter.favorited_by {
            query = query
                .join(JoinType::InnerJoin, entity::recipe::Relation::Favorite.def())
                .filter(entity::favorite::Column::UserId.eq(user_id));
        }

        if let Some(user_id) = filter.in_cart_of {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::recipe::Relation::ShoppingCartItem.def(),
                )
                .filter(entity::shopping_cart_item::Column::UserId.eq(user_id));
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    pub async fn list_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        let mut query = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::PubDate);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    pub async fn insert_ingredients(
        &self,
        recipe_id: i32,
        ingredients: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        let rows = ingredients
            .iter()
            .map(
                |(ingredient_id, amount)| entity::recipe_ingredient::ActiveModel {
                    recipe_id: ActiveValue::Set(recipe_id),
                    ingredient_id: ActiveValue::Set(*ingredient_id),
                    amount: ActiveValue::Set(*amount),
                },
            )
            .collect::<Vec<_>>();

        entity::prelude::RecipeIngredient::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn insert_tags(&self, recipe_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        let rows = tag_ids
            .iter()
            .map(|tag_id| entity::recipe_tag::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                tag_id: ActiveValue::Set(*tag_id),
            })
            .collect::<Vec<_>>();

        entity::prelude::RecipeTag::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn clear_ingredients(&self, recipe_id: i32) -> Result<(), DbErr> {
        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn clear_tags(&self, recipe_id: i32) -> Result<(), DbErr> {
        entity::prelude::RecipeTag::delete_many()
            .filter(entity::recipe_tag::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Ingredient rows for a recipe, each paired with its catalog entry
    pub async fn get_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<(entity::recipe_ingredient::Model, entity::ingredient::Model)>, DbErr> {
        let rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(row, ingredient)| {
                let ingredient_id = row.ingredient_id;
                ingredient.map(|i| (row, i)).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Ingredient ID {} missing for recipe ID {}",
                        ingredient_id, recipe_id
                    ))
                })
            })
            .collect()
    }

    pub async fn get_tags(&self, recipe: &entity::recipe::Model) -> Result<Vec<entity::tag::Model>, DbErr> {
        recipe.find_related(entity::prelude::Tag).all(self.db).await
    }

    /// Sum the ingredient amounts across every recipe in the user's shopping
    /// cart, grouped by (name, measurement unit) and ordered by name.
    pub async fn sum_shopping_cart(&self, user_id: i32) -> Result<Vec<(String, String, i64)>, DbErr> {
        entity::prelude::ShoppingCartItem::find()
            .select_only()
            .column(entity::ingredient::Column::Name)
            .column(entity::ingredient::Column::MeasurementUnit)
            .column_as(entity::recipe_ingredient::Column::Amount.sum(), "total_amount")
            .filter(entity::shopping_cart_item::Column::UserId.eq(user_id))
            .join(
                JoinType::InnerJoin,
                entity::shopping_cart_item::Relation::Recipe.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::recipe::Relation::RecipeIngredient.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::recipe_ingredient::Relation::Ingredient.def(),
            )
            .group_by(entity::ingredient::Column::Name)
            .group_by(entity::ingredient::Column::MeasurementUnit)
            .order_by_asc(entity::ingredient::Column::Name)
            .into_tuple::<(String, String, i64)>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::data::recipe::{RecipeListFilter, RecipeRepository};

    #[tokio::test]
    /// Expect inserted ingredient rows to come back paired with catalog entries
    async fn test_insert_and_get_ingredients() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_ingredient("Pepper", "g")
            .build()
            .await?;

        let recipe = test.recipes().insert_recipe(1, "Soup").await?;
        let repo = RecipeRepository::new(&test.db);

        repo.insert_ingredients(recipe.id, &[(1, 10), (2, 5)]).await?;

        let rows = repo.get_ingredients(recipe.id).await?;

        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .any(|(row, ingredient)| ingredient.name == "Salt" && row.amount == 10));
        assert!(rows
            .iter()
            .any(|(row, ingredient)| ingredient.name == "Pepper" && row.amount == 5));

        Ok(())
    }

    #[tokio::test]
    /// Expect tag slug filtering to OR across slugs without duplicate rows
    async fn test_list_filters_by_tag_slugs() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_tag("Dinner", "#E26C2D", "dinner")
            .with_tag("Lunch", "#49B64E", "lunch")
            .build()
            .await?;

        let both = test
            .recipes()
            .insert_composed_recipe(1, "Stew", &[(1, 5)], &[1, 2])
            .await?;
        let lunch_only = test
            .recipes()
            .insert_composed_recipe(1, "Sandwich", &[(1, 2)], &[2])
            .await?;
        let _untagged = test.recipes().insert_recipe(1, "Plain").await?;

        let repo = RecipeRepository::new(&test.db);

        let filter = RecipeListFilter {
            tag_slugs: Some(vec!["dinner".to_string(), "lunch".to_string()]),
            ..Default::default()
        };
        let results = repo.list(&filter).await?;

        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|r| r.id == both.id));
        assert!(results.iter().any(|r| r.id == lunch_only.id));

        Ok(())
    }

    #[tokio::test]
    /// Expect favorited-by filtering to only return the viewer's favorites
    async fn test_list_filters_by_favorited() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .build()
            .await?;

        let favorited = test.recipes().insert_recipe(1, "Stew").await?;
        let _other = test.recipes().insert_recipe(1, "Sandwich").await?;
        test.recipes().insert_favorite(2, favorited.id).await?;

        let repo = RecipeRepository::new(&test.db);

        let filter = RecipeListFilter {
            favorited_by: Some(2),
            ..Default::default()
        };
        let results = repo.list(&filter).await?;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, favorited.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect deleting a recipe to cascade into its join rows
    async fn test_delete_cascades_join_rows() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_ingredient("Salt", "g")
            .with_tag("Dinner", "#E26C2D", "dinner")
            .build()
            .await?;

        let recipe = test
            .recipes()
            .insert_composed_recipe(1, "Stew", &[(1, 5)], &[1])
            .await?;

        let repo = RecipeRepository::new(&test.db);
        let deleted = repo.delete(recipe.id).await?;

        assert_eq!(deleted, 1);
        assert!(repo.get_ingredients(recipe.id).await?.is_empty());

        Ok(())
    }
}
