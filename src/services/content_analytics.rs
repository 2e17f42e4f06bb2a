//! Engagement statistics over a seller's posts

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::entities::posts;
use crate::models::common::json_list;
use crate::models::content::{BestContent, ContentAnalyticsResponse};

const BEST_CONTENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PostSnapshot {
    pub id: i32,
    pub title: String,
    pub media_url: String,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
}

impl PostSnapshot {
    fn score(&self) -> i64 {
        self.views + self.likes + self.comments
    }
}

impl From<posts::Model> for PostSnapshot {
    fn from(p: posts::Model) -> Self {
        let media: Vec<String> = json_list(&p.media);
        Self {
            id: p.id,
            title: p.title,
            media_url: media.into_iter().next().unwrap_or_default(),
            views: p.views.into(),
            likes: p.likes.into(),
            comments: p.comments.into(),
        }
    }
}

pub fn analyze(posts: &[PostSnapshot], followers: i64) -> ContentAnalyticsResponse {
    let total_views: i64 = posts.iter().map(|p| p.views).sum();
    let total_likes: i64 = posts.iter().map(|p| p.likes).sum();
    let total_comments: i64 = posts.iter().map(|p| p.comments).sum();

    let count = posts.len() as i64;
    let (engagement_rate, content_score) = if count == 0 {
        (0.0, 0)
    } else {
        (
            engagement_rate(total_likes + total_comments, count),
            ((total_likes + total_comments + total_views) as f64 / count as f64).round() as i64,
        )
    };

    ContentAnalyticsResponse {
        total_views,
        total_likes,
        total_comments,
        engagement_rate,
        follower_growth: followers,
        content_score,
        best_content: best_content(posts),
    }
}

/// Interactions per post as a percentage, two decimal places
fn engagement_rate(interactions: i64, posts: i64) -> f64 {
    let rate = Decimal::from(interactions) / Decimal::from(posts) * dec!(100);
    rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

fn best_content(posts: &[PostSnapshot]) -> Vec<BestContent> {
    let mut ranked: Vec<&PostSnapshot> = posts.iter().collect();
    // Stable sort keeps store order among equal scores
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));

    ranked
        .into_iter()
        .take(BEST_CONTENT_LIMIT)
        .map(|p| BestContent {
            id: p.id,
            title: p.title.clone(),
            media_url: p.media_url.clone(),
            views: p.views,
            likes: p.likes,
            comments: p.comments,
        })
        .collect()
}
