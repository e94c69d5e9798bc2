//! In-memory repositories for service and router tests.

use crate::{
    abstract_trait::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, TextQueryRepositoryTrait,
        UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    domain::product_field::{FieldValue, ProductField},
    errors::RepositoryError,
    model::{NewUser, Product, TextEntry, User},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or_default()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self
            .users
            .lock()
            .map_err(|e| RepositoryError::Custom(e.to_string()))?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = self
            .users
            .lock()
            .map_err(|e| RepositoryError::Custom(e.to_string()))?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::AlreadyExists(user.username.clone()));
        }

        let created = User {
            id: users.len() as i32 + 1,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            full_name: user.full_name.clone(),
            location: user.location.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };
        users.push(created.clone());
        Ok(created)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn with_products(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        Self {
            products: Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .lock()
            .map_err(|e| RepositoryError::Custom(e.to_string()))?;
        Ok(products.clone())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn update_field(
        &self,
        id: i32,
        field: ProductField,
        value: &FieldValue,
    ) -> Result<Product, RepositoryError> {
        let mut products = self
            .products
            .lock()
            .map_err(|e| RepositoryError::Custom(e.to_string()))?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        match (field, value) {
            (ProductField::InStock, FieldValue::Integer(n)) => product.in_stock = *n,
            (ProductField::InPrice, FieldValue::Decimal(s)) => product.in_price = s.clone(),
            (ProductField::Price, FieldValue::Decimal(s)) => product.price = s.clone(),
            (ProductField::ArticleNo, FieldValue::Text(s)) => product.article_no = s.clone(),
            (ProductField::ProductService, FieldValue::Text(s)) => {
                product.product_service = s.clone()
            }
            (ProductField::Unit, FieldValue::Text(s)) => product.unit = s.clone(),
            (ProductField::Description, FieldValue::Text(s)) => product.description = s.clone(),
            (field, value) => {
                return Err(RepositoryError::Custom(format!(
                    "{value:?} does not fit column {field}"
                )));
            }
        }
        product.updated_at = Some(Utc::now().naive_utc());

        Ok(product.clone())
    }
}

/// Every call fails the way a lost database connection would.
#[derive(Debug, Default)]
pub struct UnavailableProductRepository;

#[async_trait]
impl ProductQueryRepositoryTrait for UnavailableProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for UnavailableProductRepository {
    async fn update_field(
        &self,
        _id: i32,
        _field: ProductField,
        _value: &FieldValue,
    ) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTextRepository {
    rows: Vec<(String, String, TextEntry)>,
}

impl InMemoryTextRepository {
    pub fn with(mut self, page: &str, language: &str, key: &str, value: &str) -> Self {
        self.rows.push((
            page.to_string(),
            language.to_string(),
            TextEntry {
                key: key.to_string(),
                value: value.to_string(),
            },
        ));
        self
    }
}

#[async_trait]
impl TextQueryRepositoryTrait for InMemoryTextRepository {
    async fn find_by_page(
        &self,
        page: &str,
        language: &str,
    ) -> Result<Vec<TextEntry>, RepositoryError> {
        let mut entries: Vec<TextEntry> = self
            .rows
            .iter()
            .filter(|(p, l, _)| p == page && l == language)
            .map(|(_, _, entry)| entry.clone())
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}

pub fn sample_products() -> Vec<Product> {
    let row = |id: i32, article_no: &str, name: &str, in_price: &str, price: &str, stock: i32| {
        Product {
            id,
            article_no: article_no.to_string(),
            product_service: name.to_string(),
            in_price: in_price.to_string(),
            price: price.to_string(),
            unit: "pcs".to_string(),
            in_stock: stock,
            description: format!("{name} description"),
            updated_at: None,
        }
    };

    vec![
        row(1, "A-1001", "Hammer", "80.00", "120.00", 15),
        row(2, "A-1002", "Screwdriver", "25.50", "45.00", 40),
        row(3, "B-2001", "Consulting hour", "0.00", "950.00", 0),
        row(4, "C-3001", "Paint Brush", "12.00", "29.90", 7),
    ]
}

pub fn sample_texts() -> InMemoryTextRepository {
    InMemoryTextRepository::default()
        .with("terms", "en", "title", "Terms and Conditions")
        .with("terms", "en", "content", "By using this service you agree to the terms.")
        .with("terms", "en", "backButton", "Go Back")
        .with("terms", "sv", "title", "Villkor")
        .with("terms", "sv", "content", "Genom att använda tjänsten godkänner du villkoren.")
        .with("terms", "sv", "backButton", "Tillbaka")
}
