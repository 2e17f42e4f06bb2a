//! Dashboard summary request/response models
//!
//! Models for the GET /api/dashboard/summary endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the summary endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// daily, weekly, monthly, yearly (defaults to monthly)
    pub range: Option<String>,
}

/// One period of the revenue trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Display label (e.g. "Oct", "Oct 16", "2026-W42", "2026")
    pub name: String,
    pub revenue: f64,
    pub units: i64,
}

/// Units sold per product category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPerformance {
    pub name: String,
    pub value: i64,
}

/// Entry in the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ActivityItem {
    Order {
        id: i32,
        order_id: String,
        status: String,
        amount: f64,
        created_at: DateTime<Utc>,
    },
    Product {
        id: i32,
        title: String,
        updated_at: DateTime<Utc>,
    },
}

impl ActivityItem {
    /// Creation time for orders, last update for products
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ActivityItem::Order { created_at, .. } => *created_at,
            ActivityItem::Product { updated_at, .. } => *updated_at,
        }
    }
}

/// Response for the dashboard summary endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Revenue across all of the seller's orders, not just the trend window
    pub total_revenue: f64,
    pub total_units: i64,
    pub total_products: usize,
    pub total_orders: usize,
    /// Oldest to newest, fixed length per range
    pub revenue_trend: Vec<TrendPoint>,
    pub category_performance: Vec<CategoryPerformance>,
    pub pending_orders: usize,
    /// Products created since the start of the current period
    pub new_products: usize,
    /// Percent change of the last trend period against the previous one
    pub revenue_growth: f64,
    pub units_growth: f64,
    pub recent_activity: Vec<ActivityItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_activity_item_serialization() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        let order = ActivityItem::Order {
            id: 3,
            order_id: "ORD-3".to_string(),
            status: "pending".to_string(),
            amount: 99.5,
            created_at: at,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "order");
        assert_eq!(json["orderId"], "ORD-3");
        assert_eq!(json["amount"], 99.5);
        assert!(json.get("createdAt").is_some());

        let product = ActivityItem::Product {
            id: 1,
            title: "Linen shirt".to_string(),
            updated_at: at,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "product");
        assert!(json.get("updatedAt").is_some());
    }
}
