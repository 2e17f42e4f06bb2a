#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr, Set};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use seller_dashboard::{
    AppState, auth::TokenService, entities::orders, routes::build_router,
    services::media_storage::LocalMediaStorage,
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Set up a migrated in-memory database.
/// A single pooled connection keeps the in-memory database alive.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub uploads: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = setup_test_db().await.expect("Failed to set up test DB");
        let uploads = tempfile::tempdir().expect("Failed to create upload dir");

        let state = AppState {
            db: db.clone(),
            tokens: TokenService::new(TEST_SECRET, 1),
            media: Arc::new(LocalMediaStorage::new(uploads.path(), "/uploads")),
        };

        Self {
            router: build_router(state),
            db,
            uploads,
        }
    }

    /// Send a request and return the status and JSON body (Null if the body is not JSON)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Register a seller and return (token, seller id)
    pub async fn register(&self, name: &str, email: &str) -> (String, i64) {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "name": name,
                    "email": email,
                    "password": "hunter22",
                    "city": "Pune"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {}", body);

        let token = body["token"].as_str().unwrap().to_string();
        let id = body["user"]["id"].as_i64().unwrap();
        (token, id)
    }

    /// Create a product through the API and return its id
    pub async fn create_product(&self, token: &str, title: &str, category: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/products",
                token,
                json!({ "title": title, "price": 499.0, "category": category, "stock": 10 }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create product failed: {}", body);
        body["product"]["id"].as_i64().unwrap()
    }
}

/// Orders come from the storefront, so tests insert them directly
pub async fn insert_order(
    db: &DatabaseConnection,
    seller_id: i64,
    product_id: i64,
    order_number: &str,
    quantity: i32,
    total_amount: f64,
    status: &str,
    created_at: DateTime<Utc>,
) -> orders::Model {
    let created_at = created_at.fixed_offset();
    orders::ActiveModel {
        seller_id: Set(seller_id as i32),
        product_id: Set(product_id as i32),
        order_number: Set(order_number.to_string()),
        quantity: Set(quantity),
        price: Set(total_amount / f64::from(quantity)),
        total_amount: Set(total_amount),
        status: Set(status.to_string()),
        customer_name: Set("Ravi".to_string()),
        customer_email: Set("ravi@example.com".to_string()),
        customer_phone: Set("9999999999".to_string()),
        customer_address: Set("12 MG Road, Pune".to_string()),
        payment_method: Set("cod".to_string()),
        payment_status: Set("pending".to_string()),
        tracking_number: Set(String::new()),
        notes: Set(String::new()),
        created_at: Set(created_at),
        updated_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert order")
}
