use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{NewUser, User as UserModel},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &NewUser) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (username, password_hash, full_name, location, created_at)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP)
            RETURNING id, username, password_hash, full_name, location, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.password_hash)
        .bind(&req.full_name)
        .bind(&req.location)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {}: {:?}", req.username, err);
            RepositoryError::from_insert(err, &req.username)
        })?;

        info!("✅ Created user ID {} ({})", user.id, user.username);
        Ok(user)
    }
}
