use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: &str,
        username: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            username: ActiveValue::Set(username.to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::PlatterUser::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::PlatterUser::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::PlatterUser::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::data::user::UserRepository;

    #[tokio::test]
    /// Expect created user to be retrievable by ID, email, and username
    async fn test_create_and_find_user() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let repo = UserRepository::new(&test.db);

        let created = repo
            .create("jane@example.com", "jane", "Jane", "Doe")
            .await?;

        assert_eq!(repo.get(created.id).await?, Some(created.clone()));
        assert_eq!(
            repo.find_by_email("jane@example.com").await?,
            Some(created.clone())
        );
        assert_eq!(repo.find_by_username("jane").await?, Some(created));

        Ok(())
    }

    #[tokio::test]
    /// Expect the unique email constraint to reject a duplicate email
    async fn test_create_duplicate_email_fails() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let repo = UserRepository::new(&test.db);

        repo.create("jane@example.com", "jane", "Jane", "Doe")
            .await?;
        let result = repo
            .create("jane@example.com", "janet", "Janet", "Doe")
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
