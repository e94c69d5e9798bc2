use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{TokenResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info, warn};
use validator::Validate;

/// Password hashed once at startup and compared against when the username is
/// unknown, so both failure paths pay for one bcrypt verification.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-users";

pub struct LoginService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    metrics: Metrics,
    decoy_hash: String,
}

pub struct LoginServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub query: DynUserQueryRepository,
}

impl LoginService {
    pub async fn new(deps: LoginServiceDeps, registry: &mut Registry) -> Result<Self, ServiceError> {
        let LoginServiceDeps { hash, jwt, query } = deps;

        let metrics = Metrics::new();
        metrics.register("login_service", registry);

        let decoy_hash = hash.hash_password(DECOY_PASSWORD).await?;

        Ok(Self {
            hash,
            jwt,
            query,
            metrics,
            decoy_hash,
        })
    }

    async fn authenticate(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        req.validate().map_err(|errors| {
            ServiceError::Validation(
                errors
                    .field_errors()
                    .keys()
                    .map(|field| format!("{field} is required"))
                    .collect(),
            )
        })?;

        let Some(user) = self.query.find_by_username(&req.username).await? else {
            let _ = self
                .hash
                .compare_password(&self.decoy_hash, &req.password)
                .await;
            warn!("🔐 Login rejected");
            return Err(ServiceError::InvalidCredentials);
        };

        if let Err(err) = self
            .hash
            .compare_password(&user.password_hash, &req.password)
            .await
        {
            warn!("🔐 Login rejected");
            return Err(err);
        }

        let token = self.jwt.generate_token(user.id, &user.username)?;

        info!("✅ User {} logged in", user.id);

        Ok(TokenResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        let start = Instant::now();

        let result = self.authenticate(req).await;

        let status = match &result {
            Ok(_) => Status::Success,
            Err(ServiceError::InvalidCredentials | ServiceError::Validation(_)) => Status::Error,
            Err(err) => {
                error!("❌ Login failed unexpectedly: {err}");
                Status::Error
            }
        };
        self.metrics
            .record(Method::Post, status, start.elapsed().as_secs_f64());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{DynHashing, DynJwtService, UserCommandServiceTrait},
        config::{Hashing, JwtConfig},
        domain::requests::CreateUserRequest,
        service::UserService,
        test_support::InMemoryUserRepository,
    };
    use chrono::Duration;
    use std::sync::Arc;

    async fn fixture() -> (LoginService, DynJwtService) {
        let users = Arc::new(InMemoryUserRepository::default());
        let hash = Arc::new(Hashing::new(4)) as DynHashing;
        let jwt = Arc::new(JwtConfig::new("test-secret", Duration::minutes(5))) as DynJwtService;
        let mut registry = Registry::default();

        let provisioning = UserService::new(hash.clone(), users.clone(), users.clone());
        provisioning
            .create_user(&CreateUserRequest {
                username: "alice".into(),
                password: "secret".into(),
                full_name: "Alice Andersson".into(),
                location: "Stockholm".into(),
            })
            .await
            .unwrap();

        let service = LoginService::new(
            LoginServiceDeps {
                hash,
                jwt: jwt.clone(),
                query: users,
            },
            &mut registry,
        )
        .await
        .unwrap();

        (service, jwt)
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn valid_credentials_issue_a_token_for_the_user() {
        let (service, jwt) = fixture().await;

        let response = service.login(&login("alice", "secret")).await.unwrap();

        let claims = jwt.verify_token(&response.token).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.user_id, response.user.id);
        assert_eq!(response.user.full_name, "Alice Andersson");
        assert_eq!(response.user.location, "Stockholm");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_fail_identically() {
        let (service, _) = fixture().await;

        let wrong_password = service.login(&login("alice", "nope")).await.unwrap_err();
        let unknown_user = service.login(&login("mallory", "secret")).await.unwrap_err();

        assert!(matches!(wrong_password, ServiceError::InvalidCredentials));
        assert!(matches!(unknown_user, ServiceError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_lookup() {
        let (service, _) = fixture().await;

        let err = service.login(&login("", "secret")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
