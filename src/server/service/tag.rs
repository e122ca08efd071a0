use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::tag::TagRepository,
    error::{catalog::CatalogError, Error},
    util::validate::validate_hex_color,
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a tag after validating its color and name/slug uniqueness
    pub async fn create_tag(
        &self,
        name: &str,
        color: &str,
        slug: &str,
    ) -> Result<entity::tag::Model, Error> {
        validate_hex_color(color)?;

        let repo = TagRepository::new(self.db);

        if repo.find_by_name_or_slug(name, slug).await?.is_some() {
            return Err(CatalogError::DuplicateTag(name.to_string()).into());
        }

        match repo.create(name, color, slug).await {
            Ok(tag) => Ok(tag),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(CatalogError::DuplicateTag(name.to_string()).into())
                }
                _ => Err(e.into()),
            },
        }
    }

    pub async fn list_tags(&self) -> Result<Vec<entity::tag::Model>, Error> {
        let tags = TagRepository::new(self.db).get_all().await?;

        Ok(tags)
    }

    pub async fn get_tag(&self, id: i32) -> Result<entity::tag::Model, Error> {
        TagRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::TagNotFound(id).into())
    }
}
