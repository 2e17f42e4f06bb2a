use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    prelude::Json as JsonValue,
};
use tracing::info;

use crate::AppState;
use crate::auth::AuthSeller;
use crate::entities::{prelude::*, products};
use crate::error::ApiError;
use crate::models::common::{MessageResponse, timestamp_now};
use crate::models::product::{
    CreateProductRequest, DeliveryUpdate, ProductMutationResponse, ProductResponse,
    UpdateProductRequest,
};

pub async fn list_products(
    State(state): State<AppState>,
    seller: AuthSeller,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = Products::find()
        .filter(products::Column::SellerId.eq(seller.id))
        .order_by_desc(products::Column::CreatedAt)
        .order_by_desc(products::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

pub async fn create_product(
    State(state): State<AppState>,
    seller: AuthSeller,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductMutationResponse>), ApiError> {
    let validated = payload.validate().map_err(ApiError::Validation)?;

    let now = timestamp_now();
    let mut product = products::ActiveModel {
        seller_id: Set(seller.id),
        title: Set(validated.title),
        price: Set(validated.price),
        category: Set(validated.category.as_str().to_string()),
        images: Set(JsonValue::from(payload.images)),
        colors: Set(JsonValue::from(payload.colors)),
        tags: Set(JsonValue::from(payload.tags)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    if let Some(description) = payload.description {
        product.description = Set(description);
    }
    if let Some(original_price) = payload.original_price {
        product.original_price = Set(original_price);
    }
    if let Some(subcategory) = payload.subcategory {
        product.subcategory = Set(subcategory);
    }
    if let Some(size) = payload.size {
        product.size = Set(size);
    }
    if let Some(material) = payload.material {
        product.material = Set(material);
    }
    if let Some(stock) = payload.stock {
        product.stock = Set(stock);
    }
    if let Some(is_active) = payload.is_active {
        product.is_active = Set(is_active);
    }
    if let Some(is_featured) = payload.is_featured {
        product.is_featured = Set(is_featured);
    }
    if let Some(delivery) = payload.delivery {
        apply_delivery(&mut product, delivery);
    }

    let product = product.insert(&state.db).await?;
    info!(seller_id = seller.id, product_id = product.id, category = %product.category, "Created product");

    Ok((
        StatusCode::CREATED,
        Json(ProductMutationResponse {
            message: "Product created successfully".to_string(),
            product: ProductResponse::from(product),
        }),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    seller: AuthSeller,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductMutationResponse>, ApiError> {
    let category = payload.validate().map_err(ApiError::Validation)?;

    let existing = Products::find_by_id(id)
        .filter(products::Column::SellerId.eq(seller.id))
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    let mut product = existing.into_active_model();
    if let Some(title) = payload.title {
        product.title = Set(title.trim().to_string());
    }
    if let Some(description) = payload.description {
        product.description = Set(description);
    }
    if let Some(price) = payload.price {
        product.price = Set(price);
    }
    if let Some(original_price) = payload.original_price {
        product.original_price = Set(original_price);
    }
    if let Some(category) = category {
        product.category = Set(category.as_str().to_string());
    }
    if let Some(subcategory) = payload.subcategory {
        product.subcategory = Set(subcategory);
    }
    if let Some(size) = payload.size {
        product.size = Set(size);
    }
    if let Some(material) = payload.material {
        product.material = Set(material);
    }
    if let Some(stock) = payload.stock {
        product.stock = Set(stock);
    }
    if let Some(images) = payload.images {
        product.images = Set(JsonValue::from(images));
    }
    if let Some(colors) = payload.colors {
        product.colors = Set(JsonValue::from(colors));
    }
    if let Some(tags) = payload.tags {
        product.tags = Set(JsonValue::from(tags));
    }
    if let Some(is_active) = payload.is_active {
        product.is_active = Set(is_active);
    }
    if let Some(is_featured) = payload.is_featured {
        product.is_featured = Set(is_featured);
    }
    if let Some(delivery) = payload.delivery {
        apply_delivery(&mut product, delivery);
    }
    product.updated_at = Set(timestamp_now());

    let product = product.update(&state.db).await?;
    info!(seller_id = seller.id, product_id = id, "Updated product");

    Ok(Json(ProductMutationResponse {
        message: "Product updated".to_string(),
        product: ProductResponse::from(product),
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    seller: AuthSeller,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = Products::delete_many()
        .filter(products::Column::Id.eq(id))
        .filter(products::Column::SellerId.eq(seller.id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Product"));
    }

    info!(seller_id = seller.id, product_id = id, "Deleted product");
    Ok(Json(MessageResponse::new("Product deleted")))
}

fn apply_delivery(product: &mut products::ActiveModel, delivery: DeliveryUpdate) {
    if let Some(is_cod) = delivery.is_cod {
        product.is_cod = Set(is_cod);
    }
    if let Some(is_returnable) = delivery.is_returnable {
        product.is_returnable = Set(is_returnable);
    }
    if let Some(delivery_time) = delivery.delivery_time {
        product.delivery_time = Set(delivery_time);
    }
    if let Some(shipping_cost) = delivery.shipping_cost {
        product.shipping_cost = Set(shipping_cost);
    }
}
