use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, UserCommandServiceTrait,
    },
    domain::{requests::CreateUserRequest, responses::UserResponse},
    errors::{RepositoryError, ServiceError},
    model::NewUser,
};
use async_trait::async_trait;
use tracing::{info, warn};
use validator::Validate;

/// Administrative provisioning of login accounts.
#[derive(Clone)]
pub struct UserService {
    hash: DynHashing,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

impl UserService {
    pub fn new(
        hash: DynHashing,
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
    ) -> Self {
        Self {
            hash,
            query,
            command,
        }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserService {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(vec![errors.to_string()]))?;

        if self.query.find_by_username(&req.username).await?.is_some() {
            warn!("👤 Username {} already exists", req.username);
            return Err(ServiceError::DuplicateUsername(req.username.clone()));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;

        let new_user = NewUser {
            username: req.username.clone(),
            password_hash,
            full_name: req.full_name.clone(),
            location: req.location.clone(),
        };

        // The unique index still decides when two provisioners race.
        let user = self
            .command
            .create_user(&new_user)
            .await
            .map_err(|err| match err {
                RepositoryError::AlreadyExists(username) => {
                    ServiceError::DuplicateUsername(username)
                }
                other => ServiceError::Repo(other),
            })?;

        info!("✅ Provisioned user {} ({})", user.id, user.username);
        Ok(UserResponse::from(user))
    }
}
