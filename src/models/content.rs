//! Content post request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{posts, products};
use crate::models::common::{json_list, required};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "image" => Some(MediaType::Image),
            "video" => Some(MediaType::Video),
            _ => None,
        }
    }
}

fn parse_media_type(value: &str) -> Result<MediaType, String> {
    MediaType::from_str(value)
        .ok_or_else(|| format!("Invalid media type: '{}'. Must be one of: image, video", value))
}

/// Product summary shown on a post
#[derive(Debug, Clone, Serialize)]
pub struct TaggedProduct {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub images: Vec<String>,
}

impl From<products::Model> for TaggedProduct {
    fn from(p: products::Model) -> Self {
        Self {
            id: p.id,
            images: json_list(&p.images),
            title: p.title,
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub seller_id: i32,
    pub title: String,
    pub description: String,
    pub media: Vec<String>,
    pub media_type: String,
    pub tagged_product: Option<TaggedProduct>,
    pub views: i32,
    pub likes: i32,
    pub comments: i32,
    pub liked_by: Vec<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    pub fn from_model(post: posts::Model, tagged: Option<products::Model>) -> Self {
        Self {
            id: post.id,
            seller_id: post.seller_id,
            media: json_list(&post.media),
            liked_by: json_list(&post.liked_by),
            title: post.title,
            description: post.description,
            media_type: post.media_type,
            tagged_product: tagged.map(TaggedProduct::from),
            views: post.views,
            likes: post.likes,
            comments: post.comments,
            is_active: post.is_active,
            created_at: post.created_at.with_timezone(&Utc),
            updated_at: post.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub media: Vec<String>,
    pub media_type: Option<String>,
    pub tagged_product: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPost {
    pub title: String,
    pub description: String,
    pub media_type: MediaType,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<ValidatedPost, String> {
        let (Some(title), Some(description)) = (required(&self.title), required(&self.description))
        else {
            return Err("Title and description are required".to_string());
        };

        let media_type = match self.media_type.as_deref() {
            Some(value) => parse_media_type(value)?,
            None => MediaType::Image,
        };

        Ok(ValidatedPost {
            title: title.to_string(),
            description: description.to_string(),
            media_type,
        })
    }
}

/// Partial post update; counters are only changed through engagement actions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<Vec<String>>,
    pub media_type: Option<String>,
    pub tagged_product: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<Option<MediaType>, String> {
        if self.title.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err("Title cannot be empty".to_string());
        }
        if self.description.as_ref().is_some_and(|d| d.trim().is_empty()) {
            return Err("Description cannot be empty".to_string());
        }
        self.media_type.as_deref().map(parse_media_type).transpose()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementAction {
    Like,
    Comment,
    View,
}

impl EngagementAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "like" => Some(EngagementAction::Like),
            "comment" => Some(EngagementAction::Comment),
            "view" => Some(EngagementAction::View),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngagementRequest {
    pub action: Option<String>,
}

impl EngagementRequest {
    pub fn validate(&self) -> Result<EngagementAction, String> {
        match self.action.as_deref() {
            Some(action) => EngagementAction::from_str(action).ok_or_else(|| {
                format!("Invalid action: '{}'. Must be one of: like, comment, view", action)
            }),
            None => Err("Action is required".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostsListResponse {
    pub posts: Vec<PostResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCreatedResponse {
    pub post: PostResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostMutationResponse {
    pub message: String,
    pub post: PostResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestContent {
    pub id: i32,
    pub title: String,
    pub media_url: String,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalyticsResponse {
    pub total_views: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub engagement_rate: f64,
    pub follower_growth: i64,
    pub content_score: i64,
    pub best_content: Vec<BestContent>,
}
