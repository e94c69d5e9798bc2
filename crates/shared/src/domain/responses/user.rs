use crate::model::User as UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub location: String,
}

impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        Self {
            id: value.id,
            username: value.username,
            full_name: value.full_name,
            location: value.location,
        }
    }
}
