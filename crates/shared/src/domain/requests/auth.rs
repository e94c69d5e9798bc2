use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret")]
    pub password: String,
}
