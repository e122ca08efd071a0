use serde::{Deserialize, Serialize};

use crate::model::recipe::BriefRecipeDto;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A user as seen by another user, including whether the viewer follows them
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

/// A followed author together with a capped sample of their recipes
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubscriptionDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<BriefRecipeDto>,
    pub recipes_count: u64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}
