use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Clone)]
pub struct JwtConfig {
    jwt_secret: String,
    ttl: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("jwt_secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, ttl: Duration) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            ttl,
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i32, username: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: (now + self.ttl).timestamp().max(0) as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());

        let token_data = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(err),
            })?;

        Ok(token_data.claims)
    }
}
