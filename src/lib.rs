// src/lib.rs

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use auth::TokenService;
use services::media_storage::MediaStorage;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
    pub media: Arc<dyn MediaStorage>,
}

pub mod entities {
    pub mod prelude;
    pub mod orders;
    pub mod posts;
    pub mod products;
    pub mod users;
}

pub mod services {
    pub mod content_analytics;
    pub mod dashboard;
    pub mod media_storage;
}

pub mod handlers {
    pub mod auth;
    pub mod content;
    pub mod dashboard;
    pub mod health;
    pub mod orders;
    pub mod products;
    pub mod profile;
}

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
