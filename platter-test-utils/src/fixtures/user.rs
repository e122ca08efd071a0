use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn users(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl UserFixtures<'_> {
    /// Insert a user; email and names are derived from the username.
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::PlatterUser::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(format!("{}@example.com", username)),
                username: ActiveValue::Set(username.to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a subscription edge where `user_id` follows `author_id`.
    pub async fn insert_subscription(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> Result<entity::subscription::Model, TestError> {
        Ok(
            entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                author_id: ActiveValue::Set(author_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
