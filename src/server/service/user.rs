use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{ProfileDto, RegisterUserDto},
    server::{
        data::{subscription::SubscriptionRepository, user::UserRepository},
        error::{user::UserError, Error},
        service::recipe::projection,
        util::validate::validate_username,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new user account.
    ///
    /// The username must match the allowed charset and stay off the reserved
    /// name list; email and username must both be unused. A unique violation
    /// on insert is reported the same way as a pre-checked collision so
    /// concurrent registrations cannot both succeed.
    pub async fn register(&self, input: &RegisterUserDto) -> Result<entity::user::Model, Error> {
        validate_username(&input.username)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(UserError::EmailTaken(input.email.clone()).into());
        }

        if user_repo.find_by_username(&input.username).await?.is_some() {
            return Err(UserError::UsernameTaken(input.username.clone()).into());
        }

        match user_repo
            .create(
                &input.email,
                &input.username,
                &input.first_name,
                &input.last_name,
            )
            .await
        {
            Ok(user) => Ok(user),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(self.registration_conflict(input).await?.into())
                }
                _ => Err(e.into()),
            },
        }
    }

    /// Name the field a concurrent registration collided on.
    ///
    /// A unique violation after the pre-checks passed means another
    /// registration won the race; re-running the lookups tells whether the
    /// email or the username column rejected the insert.
    async fn registration_conflict(&self, input: &RegisterUserDto) -> Result<UserError, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&input.email).await?.is_some() {
            return Ok(UserError::EmailTaken(input.email.clone()));
        }

        Ok(UserError::UsernameTaken(input.username.clone()))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<entity::user::Model>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user)
    }

    /// A user's profile as seen by the (optional) viewer
    pub async fn get_profile(
        &self,
        viewer: Option<i32>,
        user_id: i32,
    ) -> Result<ProfileDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id))?;

        let is_subscribed = match viewer {
            Some(viewer_id) if viewer_id != user_id => {
                SubscriptionRepository::new(self.db)
                    .exists(viewer_id, user_id)
                    .await?
            }
            _ => false,
        };

        Ok(projection::profile_dto(&user, is_subscribed))
    }
}
