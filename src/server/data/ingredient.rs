use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<entity::ingredient::Model, DbErr> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find_by_id(id).one(self.db).await
    }

    pub async fn get_many_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn find_by_name_and_unit(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<Option<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Name.eq(name))
            .filter(entity::ingredient::Column::MeasurementUnit.eq(measurement_unit))
            .one(self.db)
            .await
    }

    /// List ingredients, optionally restricted to a case-sensitive name prefix
    pub async fn search(
        &self,
        name_prefix: Option<&str>,
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        let mut query =
            entity::prelude::Ingredient::find().order_by_asc(entity::ingredient::Column::Name);

        if let Some(prefix) = name_prefix {
            query = query.filter(entity::ingredient::Column::Name.starts_with(prefix));
        }

        query.all(self.db).await
    }
}
