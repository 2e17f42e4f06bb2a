use axum::{Json, extract::State};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use tracing::{info, warn};

use crate::AppState;
use crate::auth::{AuthSeller, hash_password, verify_password};
use crate::entities::{prelude::*, users};
use crate::error::ApiError;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::models::common::timestamp_now;

const USER_EXISTS: &str = "User already exists";

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let new_seller = payload.validate().map_err(ApiError::Validation)?;

    let existing = Users::find()
        .filter(users::Column::Email.eq(&new_seller.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        warn!(email = %new_seller.email, "Registration rejected, email taken");
        return Err(ApiError::validation(USER_EXISTS));
    }

    // Argon2 is CPU-bound
    let password = new_seller.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("Hashing task failed: {}", e)))??;

    let now = timestamp_now();
    let user = users::ActiveModel {
        name: Set(new_seller.name),
        email: Set(new_seller.email),
        password_hash: Set(password_hash),
        city: Set(new_seller.city),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::validation(USER_EXISTS),
        _ => ApiError::Database(e),
    })?;

    let token = state.tokens.issue(&user)?;
    info!(user_id = user.id, email = %user.email, "Registered seller");

    Ok(Json(AuthResponse {
        message: "User created successfully".to_string(),
        token,
        user: UserProfile::from(&user),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = payload.validate().map_err(ApiError::Validation)?;

    let Some(user) = Users::find()
        .filter(users::Column::Email.eq(&email))
        .one(&state.db)
        .await?
    else {
        warn!(email = %email, "Login failed, unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ApiError::Internal(format!("Hashing task failed: {}", e)))?;
    if !valid {
        warn!(user_id = user.id, "Login failed, wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user)?;
    info!(user_id = user.id, "Seller logged in");

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserProfile::from(&user),
    }))
}

pub async fn me(
    State(state): State<AppState>,
    seller: AuthSeller,
) -> Result<Json<UserProfile>, ApiError> {
    let user = Users::find_by_id(seller.id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(UserProfile::from(&user)))
}
