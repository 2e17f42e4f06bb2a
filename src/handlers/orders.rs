use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::AppState;
use crate::auth::AuthSeller;
use crate::entities::{orders, prelude::*};
use crate::error::ApiError;
use crate::models::common::timestamp_now;
use crate::models::order::{OrderResponse, OrderUpdatedResponse, UpdateOrderRequest};

/// Seller's orders, newest first, each with its product
pub async fn list_orders(
    State(state): State<AppState>,
    seller: AuthSeller,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let rows = Orders::find()
        .filter(orders::Column::SellerId.eq(seller.id))
        .find_also_related(Products)
        .order_by_desc(orders::Column::CreatedAt)
        .order_by_desc(orders::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(order, product)| OrderResponse::from_model(order, product))
            .collect(),
    ))
}

/// Orders are placed through the storefront, not the seller dashboard
pub async fn create_order() -> ApiError {
    ApiError::NotImplemented
}

pub async fn update_order(
    State(state): State<AppState>,
    seller: AuthSeller,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<OrderUpdatedResponse>, ApiError> {
    let (status, payment_status) = payload.validate().map_err(ApiError::Validation)?;

    let existing = Orders::find_by_id(id)
        .filter(orders::Column::SellerId.eq(seller.id))
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;

    let mut order = existing.into_active_model();
    if let Some(status) = status {
        order.status = Set(status.as_str().to_string());
    }
    if let Some(payment_status) = payment_status {
        order.payment_status = Set(payment_status.as_str().to_string());
    }
    if let Some(tracking_number) = payload.tracking_number {
        order.tracking_number = Set(tracking_number);
    }
    if let Some(notes) = payload.notes {
        order.notes = Set(notes);
    }
    order.updated_at = Set(timestamp_now());

    let order = order.update(&state.db).await?;
    info!(
        seller_id = seller.id,
        order_id = %order.order_number,
        status = %order.status,
        "Updated order"
    );

    Ok(Json(OrderUpdatedResponse {
        message: "Order updated".to_string(),
        order: OrderResponse::from_model(order, None),
    }))
}
