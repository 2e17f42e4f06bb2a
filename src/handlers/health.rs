use axum::{Json, extract::State};

use crate::AppState;
use crate::error::ApiError;
use crate::models::common::HealthResponse;

pub async fn root() -> &'static str {
    "Seller dashboard backend is running"
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.db.ping().await?;
    Ok(Json(HealthResponse { status: "ok" }))
}
