//! Repository tests against a real Postgres with the bundled migration applied.
//!
//! Set `TEST_DATABASE_URL` to run them; each test works in its own schema.
//! Without the variable they return early.

use serde_json::{Value, json};
use shared::{
    config::ConnectionPool,
    domain::product_field::{FieldKind, ProductField},
    errors::RepositoryError,
    model::NewUser,
    repository::{ProductRepository, TextRepository, UserRepository},
};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::sync::atomic::{AtomicUsize, Ordering};

static SCHEMAS: AtomicUsize = AtomicUsize::new(0);

struct TestDb {
    pool: ConnectionPool,
    admin: ConnectionPool,
    schema: String,
}

impl TestDb {
    async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set, skipping Postgres repository test");
            return None;
        };

        let schema = format!(
            "pricelist_test_{}_{}_{}",
            std::process::id(),
            chrono::Utc::now().timestamp_micros(),
            SCHEMAS.fetch_add(1, Ordering::Relaxed)
        );

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect to TEST_DATABASE_URL");
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create test schema");

        let options = url
            .parse::<PgConnectOptions>()
            .expect("parse TEST_DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .expect("connect to test schema");

        sqlx::migrate!("../apigateway/migrations")
            .run(&pool)
            .await
            .expect("apply migrations");

        Some(Self {
            pool,
            admin,
            schema,
        })
    }

    async fn insert_product(&self, id: i32, article_no: &str, in_price: &str, price: &str) {
        sqlx::query(
            "INSERT INTO products (id, article_no, product_service, in_price, price, unit, in_stock) \
             VALUES ($1, $2, 'Hammer', $3::NUMERIC, $4::NUMERIC, 'pcs', 15)",
        )
        .bind(id)
        .bind(article_no)
        .bind(in_price)
        .bind(price)
        .execute(&self.pool)
        .await
        .expect("insert product");
    }

    async fn close(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop test schema");
        self.admin.close().await;
    }
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "$2b$10$abcdefghijklmnopqrstuuQ3dZ9xvmYH1dXc8FQ7ZQ2q5Gm5JHzW".to_string(),
        full_name: "Demo User".to_string(),
        location: "Stockholm".to_string(),
    }
}

#[tokio::test]
async fn products_are_listed_by_ascending_id() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    db.insert_product(3, "A-3", "1.00", "2.00").await;
    db.insert_product(1, "A-1", "1.00", "2.00").await;
    db.insert_product(2, "A-2", "1.00", "2.00").await;

    let products = ProductRepository::new(db.pool.clone())
        .query
        .find_all()
        .await
        .unwrap();

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(products[0].price, "2.00");

    db.close().await;
}

#[tokio::test]
async fn price_update_round_trips_the_submitted_literal() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    db.insert_product(1, "A-1001", "80.00", "120.00").await;
    let repo = ProductRepository::new(db.pool.clone());

    let cases = [
        ("150", "150"),
        (" 99.50 ", "99.50"),
        ("+007.50", "7.50"),
        (".5", "0.5"),
    ];
    for (submitted, stored) in cases {
        let value = ProductField::Price.coerce(&json!(submitted)).unwrap();
        let updated = repo
            .command
            .update_field(1, ProductField::Price, &value)
            .await
            .unwrap();

        assert_eq!(updated.price, stored, "submitted {submitted:?}");
        assert_eq!(updated.in_price, "80.00");
        assert_eq!(updated.article_no, "A-1001");
        assert!(updated.updated_at.is_some());
    }

    let listed = repo.query.find_all().await.unwrap();
    assert_eq!(listed[0].price, "0.5");

    db.close().await;
}

#[tokio::test]
async fn values_at_the_field_bounds_fit_their_columns() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    db.insert_product(1, "A-1001", "80.00", "120.00").await;
    let repo = ProductRepository::new(db.pool.clone());

    for field in ProductField::ALL {
        let raw: Value = match field.kind() {
            FieldKind::Text {
                max_chars: Some(max),
            } => json!("å".repeat(max)),
            FieldKind::Text { max_chars: None } => json!("d".repeat(10_000)),
            FieldKind::Decimal {
                integer_digits,
                fraction_digits,
            } => json!(format!(
                "-{}.{}",
                "9".repeat(integer_digits),
                "9".repeat(fraction_digits)
            )),
            FieldKind::Integer => json!(i32::MAX),
        };
        let value = field.coerce(&raw).unwrap();

        repo.command
            .update_field(1, field, &value)
            .await
            .unwrap_or_else(|err| panic!("{field} rejected its own bound: {err:?}"));
    }

    db.close().await;
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let repo = ProductRepository::new(db.pool.clone());

    let value = ProductField::InStock.coerce(&json!(5)).unwrap();
    let err = repo
        .command
        .update_field(999, ProductField::InStock, &value)
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound));

    db.close().await;
}

#[tokio::test]
async fn duplicate_username_is_already_exists() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let repo = UserRepository::new(db.pool.clone());

    let created = repo.command.create_user(&new_user("demo")).await.unwrap();
    assert_eq!(created.location, "Stockholm");

    let err = repo.command.create_user(&new_user("demo")).await.unwrap_err();
    assert!(matches!(err, RepositoryError::AlreadyExists(ref name) if name == "demo"));

    let found = repo.query.find_by_username("demo").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.query.find_by_username("nobody").await.unwrap().is_none());

    db.close().await;
}

#[tokio::test]
async fn seeded_terms_are_returned_per_language() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let repo = TextRepository::new(db.pool.clone());

    let english = repo.query.find_by_page("terms", "en").await.unwrap();
    assert_eq!(english.first().map(|e| e.key.as_str()), Some("backButton"));
    assert_eq!(english.last().map(|e| e.key.as_str()), Some("title"));
    assert!(
        english
            .iter()
            .any(|e| e.key == "title" && e.value == "Terms and Conditions")
    );

    let swedish = repo.query.find_by_page("terms", "sv").await.unwrap();
    assert_eq!(swedish.len(), english.len());

    assert!(repo.query.find_by_page("nope", "en").await.unwrap().is_empty());
    assert!(repo.query.find_by_page("terms", "de").await.unwrap().is_empty());

    db.close().await;
}
