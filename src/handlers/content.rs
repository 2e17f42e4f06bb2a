use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, prelude::Json as JsonValue, sea_query::Expr,
};
use tracing::{debug, info};

use crate::AppState;
use crate::auth::AuthSeller;
use crate::entities::{posts, prelude::*, products};
use crate::error::ApiError;
use crate::models::common::{MessageResponse, json_list, timestamp_now};
use crate::models::content::{
    ContentAnalyticsResponse, CreatePostRequest, EngagementAction, EngagementRequest,
    PostCreatedResponse, PostMutationResponse, PostResponse, PostsListResponse, UpdatePostRequest,
};
use crate::services::content_analytics::{self, PostSnapshot};

const LIKE_ATTEMPTS: u32 = 8;

pub async fn list_posts(
    State(state): State<AppState>,
    seller: AuthSeller,
) -> Result<Json<PostsListResponse>, ApiError> {
    let rows = Posts::find()
        .filter(posts::Column::SellerId.eq(seller.id))
        .find_also_related(Products)
        .order_by_desc(posts::Column::CreatedAt)
        .order_by_desc(posts::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(PostsListResponse {
        posts: rows
            .into_iter()
            .map(|(post, tagged)| PostResponse::from_model(post, tagged))
            .collect(),
    }))
}

pub async fn create_post(
    State(state): State<AppState>,
    seller: AuthSeller,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostCreatedResponse>), ApiError> {
    let validated = payload.validate().map_err(ApiError::Validation)?;

    let tagged = match payload.tagged_product {
        Some(product_id) => Some(owned_product(&state.db, seller.id, product_id).await?),
        None => None,
    };

    let now = timestamp_now();
    let post = posts::ActiveModel {
        seller_id: Set(seller.id),
        title: Set(validated.title),
        description: Set(validated.description),
        media: Set(JsonValue::from(payload.media)),
        media_type: Set(validated.media_type.as_str().to_string()),
        tagged_product_id: Set(tagged.as_ref().map(|p| p.id)),
        views: Set(0),
        likes: Set(0),
        comments: Set(0),
        liked_by: Set(JsonValue::Array(Vec::new())),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(seller_id = seller.id, post_id = post.id, "Created post");

    Ok((
        StatusCode::CREATED,
        Json(PostCreatedResponse {
            post: PostResponse::from_model(post, tagged),
        }),
    ))
}

pub async fn update_post(
    State(state): State<AppState>,
    seller: AuthSeller,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostMutationResponse>, ApiError> {
    let media_type = payload.validate().map_err(ApiError::Validation)?;

    let existing = Posts::find_by_id(id)
        .filter(posts::Column::SellerId.eq(seller.id))
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    let mut post = existing.into_active_model();
    if let Some(title) = payload.title {
        post.title = Set(title.trim().to_string());
    }
    if let Some(description) = payload.description {
        post.description = Set(description);
    }
    if let Some(media) = payload.media {
        post.media = Set(JsonValue::from(media));
    }
    if let Some(media_type) = media_type {
        post.media_type = Set(media_type.as_str().to_string());
    }
    if let Some(product_id) = payload.tagged_product {
        owned_product(&state.db, seller.id, product_id).await?;
        post.tagged_product_id = Set(Some(product_id));
    }
    if let Some(is_active) = payload.is_active {
        post.is_active = Set(is_active);
    }
    post.updated_at = Set(timestamp_now());

    let post = post.update(&state.db).await?;
    info!(seller_id = seller.id, post_id = id, "Updated post");

    let tagged = tagged_product(&state.db, post.tagged_product_id).await?;
    Ok(Json(PostMutationResponse {
        message: "Post updated".to_string(),
        post: PostResponse::from_model(post, tagged),
    }))
}

pub async fn delete_post(
    State(state): State<AppState>,
    seller: AuthSeller,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = Posts::delete_many()
        .filter(posts::Column::Id.eq(id))
        .filter(posts::Column::SellerId.eq(seller.id))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Post"));
    }

    info!(seller_id = seller.id, post_id = id, "Deleted post");
    Ok(Json(MessageResponse::new("Post deleted")))
}

/// Like, comment on or view any seller's post
pub async fn engage_post(
    State(state): State<AppState>,
    seller: AuthSeller,
    Path(id): Path<i32>,
    Json(payload): Json<EngagementRequest>,
) -> Result<Json<PostMutationResponse>, ApiError> {
    let action = payload.validate().map_err(ApiError::Validation)?;

    match action {
        EngagementAction::Like => record_like(&state.db, id, seller.id).await?,
        EngagementAction::Comment => increment(&state.db, id, posts::Column::Comments).await?,
        EngagementAction::View => increment(&state.db, id, posts::Column::Views).await?,
    }

    let post = Posts::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;
    info!(seller_id = seller.id, post_id = id, action = ?action, "Recorded engagement");

    let tagged = tagged_product(&state.db, post.tagged_product_id).await?;
    Ok(Json(PostMutationResponse {
        message: "Post updated".to_string(),
        post: PostResponse::from_model(post, tagged),
    }))
}

/// `column = column + 1` in a single statement
async fn increment<C: ConnectionTrait>(
    db: &C,
    post_id: i32,
    column: posts::Column,
) -> Result<(), ApiError> {
    let result = Posts::update_many()
        .col_expr(column, Expr::col(column).add(1))
        .col_expr(posts::Column::UpdatedAt, Expr::value(timestamp_now()))
        .filter(posts::Column::Id.eq(post_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Post"));
    }
    Ok(())
}

/// Add `seller_id` to the post's likers.
///
/// The write only lands if `likes` still holds the value that was read, so
/// a concurrent like forces a re-read and a fresh `Already liked` check.
async fn record_like<C: ConnectionTrait>(
    db: &C,
    post_id: i32,
    seller_id: i32,
) -> Result<(), ApiError> {
    for attempt in 1..=LIKE_ATTEMPTS {
        let post = Posts::find_by_id(post_id)
            .one(db)
            .await?
            .ok_or(ApiError::NotFound("Post"))?;

        let mut liked_by: Vec<i32> = json_list(&post.liked_by);
        if liked_by.contains(&seller_id) {
            return Err(ApiError::validation("Already liked"));
        }
        liked_by.push(seller_id);

        let result = Posts::update_many()
            .col_expr(posts::Column::Likes, Expr::value(post.likes + 1))
            .col_expr(posts::Column::LikedBy, Expr::value(JsonValue::from(liked_by)))
            .col_expr(posts::Column::UpdatedAt, Expr::value(timestamp_now()))
            .filter(posts::Column::Id.eq(post_id))
            .filter(posts::Column::Likes.eq(post.likes))
            .exec(db)
            .await?;

        if result.rows_affected == 1 {
            return Ok(());
        }
        debug!(post_id, attempt, "Concurrent like, retrying");
    }

    Err(ApiError::Internal(format!(
        "Like on post {} lost {} races",
        post_id, LIKE_ATTEMPTS
    )))
}

pub async fn content_analytics(
    State(state): State<AppState>,
    seller: AuthSeller,
) -> Result<Json<ContentAnalyticsResponse>, ApiError> {
    let (posts, user) = tokio::try_join!(
        Posts::find()
            .filter(posts::Column::SellerId.eq(seller.id))
            .order_by_desc(posts::Column::CreatedAt)
            .all(&state.db),
        Users::find_by_id(seller.id).one(&state.db),
    )?;
    let user = user.ok_or(ApiError::NotFound("User"))?;

    let snapshots: Vec<PostSnapshot> = posts.into_iter().map(PostSnapshot::from).collect();
    Ok(Json(content_analytics::analyze(
        &snapshots,
        i64::from(user.followers),
    )))
}

/// A product of this seller that may be tagged on a post
async fn owned_product<C: ConnectionTrait>(
    db: &C,
    seller_id: i32,
    product_id: i32,
) -> Result<products::Model, ApiError> {
    Products::find_by_id(product_id)
        .filter(products::Column::SellerId.eq(seller_id))
        .one(db)
        .await?
        .ok_or_else(|| ApiError::validation("Tagged product not found"))
}

/// Tagged products may since have been deleted
async fn tagged_product<C: ConnectionTrait>(
    db: &C,
    product_id: Option<i32>,
) -> Result<Option<products::Model>, ApiError> {
    match product_id {
        Some(id) => Ok(Products::find_by_id(id).one(db).await?),
        None => Ok(None),
    }
}
