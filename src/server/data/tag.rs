use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        color: &str,
        slug: &str,
    ) -> Result<entity::tag::Model, DbErr> {
        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            color: ActiveValue::Set(color.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            ..Default::default()
        };

        tag.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// Find a tag colliding with the given name or slug
    pub async fn find_by_name_or_slug(
        &self,
        name: &str,
        slug: &str,
    ) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(
                Condition::any()
                    .add(entity::tag::Column::Name.eq(name))
                    .add(entity::tag::Column::Slug.eq(slug)),
            )
            .one(self.db)
            .await
    }
}
