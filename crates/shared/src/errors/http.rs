use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

const GENERIC_SERVER_ERROR: &str = "Server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".to_string()),

            ServiceError::Jwt(_) => HttpError::Unauthorized("Invalid token".to_string()),

            ServiceError::InvalidField(_) => HttpError::BadRequest("Invalid field".to_string()),

            ServiceError::InvalidValue { field, reason } => {
                HttpError::BadRequest(format!("Invalid value for {field}: {reason}"))
            }

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {}", errors.join("; ")))
            }

            ServiceError::DuplicateUsername(_) => {
                HttpError::Conflict("Username already exists".to_string())
            }

            ServiceError::Repo(RepositoryError::NotFound) => {
                HttpError::NotFound("Product not found".to_string())
            }

            ServiceError::Repo(RepositoryError::AlreadyExists(_)) => {
                HttpError::Conflict("Already exists".to_string())
            }

            other => {
                error!("❌ Unhandled service error: {other}");
                HttpError::Internal(GENERIC_SERVER_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED)]
    #[case(ServiceError::TokenExpired, StatusCode::UNAUTHORIZED)]
    #[case(ServiceError::InvalidField("id".into()), StatusCode::BAD_REQUEST)]
    #[case(ServiceError::Repo(RepositoryError::NotFound), StatusCode::NOT_FOUND)]
    #[case(ServiceError::DuplicateUsername("alice".into()), StatusCode::CONFLICT)]
    #[case(ServiceError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_service_errors_to_status(#[case] err: ServiceError, #[case] expected: StatusCode) {
        let response = HttpError::from(err).into_response();
        assert_eq!(response.status(), expected);
    }

    #[test]
    fn persistence_detail_does_not_reach_the_message() {
        let err = ServiceError::Repo(RepositoryError::Custom(
            "duplicate key value violates unique constraint \"products_pkey\"".into(),
        ));

        assert_eq!(
            HttpError::from(err),
            HttpError::Internal("Server error".to_string())
        );
    }

    #[test]
    fn field_name_is_not_echoed_for_invalid_field() {
        let err = ServiceError::InvalidField("password".into());
        assert_eq!(
            HttpError::from(err),
            HttpError::BadRequest("Invalid field".to_string())
        );
    }
}
