use crate::{
    domain::{requests::CreateUserRequest, responses::UserResponse},
    errors::{RepositoryError, ServiceError},
    model::{NewUser, User as UserModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    /// `AlreadyExists` when the username is taken.
    async fn create_user(&self, user: &NewUser) -> Result<UserModel, RepositoryError>;
}

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError>;
}
