use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::SubscriptionDto,
    server::{
        data::{
            recipe::RecipeRepository, subscription::SubscriptionRepository, user::UserRepository,
        },
        error::{relation::RelationError, Error},
        service::recipe::projection,
    },
};

const SUBSCRIPTION_EDGE: &str = "subscription";

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribe `user_id` to `author_id`.
    ///
    /// Self-subscription is rejected before any lookup. Concurrent subscribes
    /// are decided by the subscription table's composite primary key.
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionDto, Error> {
        if user_id == author_id {
            return Err(RelationError::SelfSubscription(user_id).into());
        }

        let author = UserRepository::new(self.db)
            .get(author_id)
            .await?
            .ok_or(RelationError::AuthorNotFound(author_id))?;

        let subscription_repo = SubscriptionRepository::new(self.db);

        if subscription_repo.exists(user_id, author_id).await? {
            return Err(Self::already_exists(user_id, author_id).into());
        }

        if let Err(e) = subscription_repo.insert(user_id, author_id).await {
            return match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(Self::already_exists(user_id, author_id).into())
                }
                _ => Err(e.into()),
            };
        }

        self.project_subscription(author, recipes_limit).await
    }

    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), Error> {
        if UserRepository::new(self.db).get(author_id).await?.is_none() {
            return Err(RelationError::AuthorNotFound(author_id).into());
        }

        let removed = SubscriptionRepository::new(self.db)
            .remove(user_id, author_id)
            .await?;

        if removed == 0 {
            return Err(RelationError::EdgeNotFound {
                edge: SUBSCRIPTION_EDGE,
                user_id,
                target_id: author_id,
            }
            .into());
        }

        Ok(())
    }

    /// Authors the user follows, each with a capped recipe sample
    pub async fn list_subscriptions(
        &self,
        user_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<Vec<SubscriptionDto>, Error> {
        let authors = SubscriptionRepository::new(self.db)
            .list_authors(user_id)
            .await?;

        let mut subscriptions = Vec::with_capacity(authors.len());

        for author in authors {
            subscriptions.push(self.project_subscription(author, recipes_limit).await?);
        }

        Ok(subscriptions)
    }

    async fn project_subscription(
        &self,
        author: entity::user::Model,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionDto, Error> {
        let recipe_repo = RecipeRepository::new(self.db);

        let recipes = recipe_repo.list_by_author(author.id, recipes_limit).await?;
        let recipes_count = recipe_repo.count_by_author(author.id).await?;

        Ok(projection::subscription_dto(&author, &recipes, recipes_count))
    }

    fn already_exists(user_id: i32, author_id: i32) -> RelationError {
        RelationError::AlreadyExists {
            edge: SUBSCRIPTION_EDGE,
            user_id,
            target_id: author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use platter_test_utils::prelude::*;

    use crate::server::{
        error::{relation::RelationError, Error},
        service::subscription::SubscriptionService,
    };

    #[tokio::test]
    /// Expect subscribing to return the author's profile with recipe sample
    async fn test_subscribe_success() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .build()
            .await?;

        test.recipes().insert_recipe(2, "Stew").await?;
        test.recipes().insert_recipe(2, "Soup").await?;

        let service = SubscriptionService::new(&test.db);
        let result = service.subscribe(1, 2, Some(1)).await;

        assert!(result.is_ok());
        let subscription = result.unwrap();

        assert_eq!(subscription.username, "john");
        assert!(subscription.is_subscribed);
        assert_eq!(subscription.recipes.len(), 1);
        assert_eq!(subscription.recipes_count, 2);

        Ok(())
    }

    #[tokio::test]
    /// Expect self-subscription to be rejected before any write
    async fn test_subscribe_to_self_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let service = SubscriptionService::new(&test.db);
        let result = service.subscribe(1, 1, None).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::SelfSubscription(1)))
        ));

        let subscriptions = service.list_subscriptions(1, None).await?;
        assert!(subscriptions.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect subscribing to a missing author to fail as AuthorNotFound
    async fn test_subscribe_missing_author_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .build()
            .await?;

        let service = SubscriptionService::new(&test.db);
        let result = service.subscribe(1, 42, None).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::AuthorNotFound(42)))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect a duplicate subscription to fail as AlreadyExists
    async fn test_subscribe_twice_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .build()
            .await?;

        let service = SubscriptionService::new(&test.db);

        service.subscribe(1, 2, None).await?;
        let result = service.subscribe(1, 2, None).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::AlreadyExists { .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect unsubscribing a missing edge to fail as EdgeNotFound
    async fn test_unsubscribe_missing_edge_fails() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .build()
            .await?;

        let service = SubscriptionService::new(&test.db);
        let result = service.unsubscribe(1, 2).await;

        assert!(matches!(
            result,
            Err(Error::RelationError(RelationError::EdgeNotFound { .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect list_subscriptions to reflect subscribe and unsubscribe
    async fn test_list_subscriptions() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_core_tables()
            .with_user("jane")
            .with_user("john")
            .with_user("julia")
            .build()
            .await?;

        let service = SubscriptionService::new(&test.db);

        service.subscribe(1, 2, None).await?;
        service.subscribe(1, 3, None).await?;
        service.unsubscribe(1, 2).await?;

        let subscriptions = service.list_subscriptions(1, None).await?;

        assert_eq!(subscriptions.len(), 1);
        assert_eq!(subscriptions[0].username, "julia");

        Ok(())
    }
}
