use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::debug;

use crate::AppState;
use crate::auth::AuthSeller;
use crate::entities::{orders, prelude::*, products};
use crate::error::ApiError;
use crate::models::dashboard::{DashboardQuery, DashboardSummary};
use crate::services::dashboard::{Granularity, OrderSnapshot, ProductSnapshot, summarize};

pub async fn get_summary(
    State(state): State<AppState>,
    seller: AuthSeller,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let granularity = Granularity::parse(query.range.as_deref());

    let (order_rows, product_rows) = tokio::try_join!(
        Orders::find()
            .filter(orders::Column::SellerId.eq(seller.id))
            .all(&state.db),
        Products::find()
            .filter(products::Column::SellerId.eq(seller.id))
            .all(&state.db),
    )?;

    debug!(
        seller_id = seller.id,
        range = granularity.as_str(),
        orders = order_rows.len(),
        products = product_rows.len(),
        "Building dashboard summary"
    );

    let orders: Vec<OrderSnapshot> = order_rows.into_iter().map(OrderSnapshot::from).collect();
    let products: Vec<ProductSnapshot> = product_rows.into_iter().map(ProductSnapshot::from).collect();

    Ok(Json(summarize(Utc::now(), granularity, &orders, &products)))
}
