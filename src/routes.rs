use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;
use crate::handlers::{auth, content, dashboard, health, orders, products, profile};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{id}", put(orders::update_order))
        .route(
            "/api/content",
            get(content::list_posts).post(content::create_post),
        )
        .route("/api/content/analytics", get(content::content_analytics))
        .route(
            "/api/content/{id}",
            put(content::update_post)
                .delete(content::delete_post)
                .patch(content::engage_post),
        )
        .route("/api/profile", put(profile::update_profile))
        .route("/api/profile/documents", post(profile::upload_document))
        .route("/api/dashboard/summary", get(dashboard::get_summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
