use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, username, password_hash, full_name, location, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }
}
