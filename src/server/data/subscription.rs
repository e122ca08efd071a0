use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, author_id: i32) -> Result<bool, DbErr> {
        Ok(
            entity::prelude::Subscription::find_by_id((user_id, author_id))
                .one(self.db)
                .await?
                .is_some(),
        )
    }

    pub async fn insert(&self, user_id: i32, author_id: i32) -> Result<(), DbErr> {
        entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove(&self, user_id: i32, author_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Subscription::delete_by_id((user_id, author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Authors the user follows, oldest subscription first
    pub async fn list_authors(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::PlatterUser::find()
            .join(
                JoinType::InnerJoin,
                entity::subscription::Relation::Author.def().rev(),
            )
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .order_by_asc(entity::subscription::Column::CreatedAt)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::data::subscription::SubscriptionRepository;

    #[tokio::test]
    /// Expect the composite primary key to reject a duplicate subscription
    async fn test_duplicate_subscription_insert_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .build()
            .await?;

        let repo = SubscriptionRepository::new(&test.db);

        repo.insert(1, 2).await?;
        let result = repo.insert(1, 2).await;

        assert!(result.is_err());
        assert!(repo.exists(1, 2).await?);

        Ok(())
    }

    #[tokio::test]
    /// Expect list_authors to only return authors the user follows
    async fn test_list_authors() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .with_user("julia")
            .build()
            .await?;

        test.users().insert_subscription(1, 2).await?;

        let repo = SubscriptionRepository::new(&test.db);
        let authors = repo.list_authors(1).await?;

        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].username, "john");

        Ok(())
    }
}
