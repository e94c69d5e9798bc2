use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Single-field change to one product row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProductFieldRequest {
    #[validate(length(min = 1, message = "Field is required"))]
    #[schema(example = "price")]
    pub field: String,

    #[schema(value_type = Object, example = "150")]
    pub value: serde_json::Value,
}
