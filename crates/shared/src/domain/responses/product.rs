use crate::{domain::product_field::ProductField, model::Product as ProductModel};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub article_no: String,
    pub product_service: String,
    #[schema(example = "100")]
    pub in_price: String,
    #[schema(example = "150")]
    pub price: String,
    pub unit: String,
    pub in_stock: i32,
    pub description: String,
    pub updated_at: Option<NaiveDateTime>,
}

impl ProductResponse {
    /// Display value of one editable cell.
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::ArticleNo => self.article_no.clone(),
            ProductField::ProductService => self.product_service.clone(),
            ProductField::InPrice => self.in_price.clone(),
            ProductField::Price => self.price.clone(),
            ProductField::Unit => self.unit.clone(),
            ProductField::InStock => self.in_stock.to_string(),
            ProductField::Description => self.description.clone(),
        }
    }
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        Self {
            id: value.id,
            article_no: value.article_no,
            product_service: value.product_service,
            in_price: value.in_price,
            price: value.price,
            unit: value.unit,
            in_stock: value.in_stock,
            description: value.description,
            updated_at: value.updated_at,
        }
    }
}
