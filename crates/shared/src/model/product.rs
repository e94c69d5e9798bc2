use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column list for product reads. Prices are NUMERIC in the store and
/// travel as their text rendering.
pub const PRODUCT_COLUMNS: &str = "id, article_no, product_service, \
    in_price::TEXT AS in_price, price::TEXT AS price, unit, in_stock, description, updated_at";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub article_no: String,
    pub product_service: String,
    pub in_price: String,
    pub price: String,
    pub unit: String,
    pub in_stock: i32,
    pub description: String,
    pub updated_at: Option<NaiveDateTime>,
}
