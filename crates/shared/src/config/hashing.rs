use super::myconfig::DEFAULT_BCRYPT_COST;
use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

#[derive(Debug, Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
            .map_err(ServiceError::Bcrypt)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let password = password.to_owned();
        let hashed_password = hashed_password.to_owned();

        let is_valid = tokio::task::spawn_blocking(move || verify(password, &hashed_password))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
            .map_err(ServiceError::Bcrypt)?;

        if is_valid {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let hashing = Hashing::new(4);
        let hashed = hashing.hash_password("secret").await.unwrap();

        assert_ne!(hashed, "secret");
        assert!(hashing.compare_password(&hashed, "secret").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let hashing = Hashing::new(4);
        let hashed = hashing.hash_password("secret").await.unwrap();

        let err = hashing.compare_password(&hashed, "nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn same_password_gets_different_salts() {
        let hashing = Hashing::new(4);
        let first = hashing.hash_password("secret").await.unwrap();
        let second = hashing.hash_password("secret").await.unwrap();

        assert_ne!(first, second);
    }
}
