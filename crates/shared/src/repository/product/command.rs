use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::product_field::{FieldKind, FieldValue, ProductField},
    errors::RepositoryError,
    model::{PRODUCT_COLUMNS, Product as ProductModel},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// The column name comes from the closed `ProductField` set, never from input.
fn update_statement(field: ProductField) -> String {
    let placeholder = match field.kind() {
        FieldKind::Decimal { .. } => "$1::NUMERIC",
        FieldKind::Text { .. } | FieldKind::Integer => "$1",
    };

    format!(
        "UPDATE products SET {column} = {placeholder}, updated_at = CURRENT_TIMESTAMP \
         WHERE id = $2 RETURNING {PRODUCT_COLUMNS}",
        column = field.column(),
    )
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn update_field(
        &self,
        id: i32,
        field: ProductField,
        value: &FieldValue,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = update_statement(field);
        let query = sqlx::query_as::<_, ProductModel>(&sql);
        let query = match value {
            FieldValue::Text(v) | FieldValue::Decimal(v) => query.bind(v.clone()),
            FieldValue::Integer(v) => query.bind(*v),
        };

        let product = query
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update {field} of product ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated {field} of product ID {}", product.id);
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_columns_are_cast() {
        let sql = update_statement(ProductField::Price);
        assert!(sql.starts_with("UPDATE products SET price = $1::NUMERIC, updated_at"));
        assert!(sql.contains("WHERE id = $2"));
    }

    #[test]
    fn every_statement_targets_exactly_its_column() {
        for field in ProductField::ALL {
            let sql = update_statement(field);
            assert!(sql.contains(&format!("SET {} = $1", field.column())));
        }
    }
}
