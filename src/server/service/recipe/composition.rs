use std::collections::{HashMap, HashSet};

use sea_orm::ConnectionTrait;

use crate::{
    model::recipe::RecipeInputDto,
    server::{
        data::{ingredient::IngredientRepository, tag::TagRepository},
        error::{composition::CompositionError, Error},
        util::image,
    },
};

/// A recipe composition that passed validation: every ingredient and tag
/// resolved against the catalog, amounts and cooking time in range, and the
/// image payload decoded.
pub struct ValidatedComposition {
    pub ingredients: Vec<(entity::ingredient::Model, i32)>,
    pub tags: Vec<entity::tag::Model>,
    pub cooking_time: i32,
    pub image_reference: String,
}

/// Validates a submitted composition without side effects.
///
/// IDs are resolved against the store first, so an unknown ID is reported as
/// unknown rather than as a duplicate. Errors name the offending ID or value.
pub struct CompositionValidator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompositionValidator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn validate(&self, input: &RecipeInputDto) -> Result<ValidatedComposition, Error> {
        if input.cooking_time < 1 {
            return Err(CompositionError::InvalidCookingTime(input.cooking_time).into());
        }

        let image_reference = image::derive_reference(&input.image)?;

        let ingredients = self.resolve_ingredients(input).await?;
        let tags = self.resolve_tags(input).await?;

        Ok(ValidatedComposition {
            ingredients,
            tags,
            cooking_time: input.cooking_time,
            image_reference,
        })
    }

    async fn resolve_ingredients(
        &self,
        input: &RecipeInputDto,
    ) -> Result<Vec<(entity::ingredient::Model, i32)>, Error> {
        if input.ingredients.is_empty() {
            return Err(CompositionError::EmptyIngredients.into());
        }

        for entry in &input.ingredients {
            if entry.amount < 1 {
                return Err(CompositionError::InvalidAmount {
                    ingredient_id: entry.id,
                    amount: entry.amount,
                }
                .into());
            }
        }

        let ids = input.ingredients.iter().map(|i| i.id).collect::<Vec<_>>();
        let resolved: HashMap<i32, entity::ingredient::Model> = IngredientRepository::new(self.db)
            .get_many_by_ids(&ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut seen = HashSet::new();
        let mut ingredients = Vec::with_capacity(input.ingredients.len());

        for entry in &input.ingredients {
            let model = resolved
                .get(&entry.id)
                .ok_or(CompositionError::UnknownIngredient(entry.id))?;

            if !seen.insert(entry.id) {
                return Err(CompositionError::DuplicateIngredient(entry.id).into());
            }

            ingredients.push((model.clone(), entry.amount));
        }

        Ok(ingredients)
    }

    async fn resolve_tags(&self, input: &RecipeInputDto) -> Result<Vec<entity::tag::Model>, Error> {
        if input.tags.is_empty() {
            return Err(CompositionError::EmptyTags.into());
        }

        let resolved: HashMap<i32, entity::tag::Model> = TagRepository::new(self.db)
            .get_many_by_ids(&input.tags)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut seen = HashSet::new();
        let mut tags = Vec::with_capacity(input.tags.len());

        for tag_id in &input.tags {
            let model = resolved
                .get(tag_id)
                .ok_or(CompositionError::UnknownTag(*tag_id))?;

            if !seen.insert(*tag_id) {
                return Err(CompositionError::DuplicateTag(*tag_id).into());
            }

            tags.push(model.clone());
        }

        Ok(tags)
    }
}
