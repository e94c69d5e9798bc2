use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// JSON body extractor that runs `validator` rules and answers with the
/// regular `{status, message}` error body.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// Path extractor whose rejection uses the regular `{status, message}` body
/// instead of axum's plain-text one.
pub struct SimplePath<T>(pub T);

impl<S, T> FromRequestParts<S> for SimplePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match error.code.as_ref() {
                        "length" => format!("{field}: Invalid length"),
                        _ => format!("Invalid {field}"),
                    })
            })
        })
        .collect();

    messages.sort();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
