//! Dashboard summary aggregation
//!
//! Folds a seller's orders and products into the dashboard summary: a
//! fixed-length revenue/units trend, period-over-period growth, category
//! rollups and a recent activity feed. Everything here is a pure function of
//! `(now, granularity, orders, products)`; the handler does the reads.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::entities::{orders, products};
use crate::models::dashboard::{
    ActivityItem, CategoryPerformance, DashboardSummary, TrendPoint,
};
use crate::models::order::OrderStatus;

/// Number of most recent orders and products that feed the activity list
const RECENT_PER_KIND: usize = 5;
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Time bucketing unit for the trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Granularity {
    /// Parse the `range` query value. Absent or unknown values fall back to monthly.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("daily") => Granularity::Daily,
            Some("weekly") => Granularity::Weekly,
            Some("yearly") => Granularity::Yearly,
            _ => Granularity::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Length of the trend series
    pub fn periods(&self) -> u32 {
        match self {
            Granularity::Daily => 7,
            Granularity::Weekly => 8,
            Granularity::Monthly => 6,
            Granularity::Yearly => 5,
        }
    }

    /// Bucket key for a date: `2026-03-07`, `2026-W10`, `2026-3` (month not
    /// zero padded) or `2026`.
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Daily => date.format("%Y-%m-%d").to_string(),
            Granularity::Weekly => format!("{}-W{}", date.year(), week_of_year(date)),
            Granularity::Monthly => format!("{}-{}", date.year(), date.month()),
            Granularity::Yearly => date.year().to_string(),
        }
    }

    /// First day of the bucket containing `date`. Weekly buckets are cut at
    /// Jan 1, so the week spanning New Year is two buckets.
    fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        let back = match self {
            Granularity::Daily => 0,
            Granularity::Weekly => date.weekday().num_days_from_sunday().min(date.ordinal0()),
            Granularity::Monthly => date.day0(),
            Granularity::Yearly => date.ordinal0(),
        };
        date - Duration::days(i64::from(back))
    }

    /// A date inside the bucket just before the one containing `date`
    fn previous(&self, date: NaiveDate) -> NaiveDate {
        self.bucket_start(date) - Duration::days(1)
    }

    fn label(&self, anchor: NaiveDate, key: &str) -> String {
        match self {
            Granularity::Daily => anchor.format("%b %-d").to_string(),
            Granularity::Weekly => key.to_string(),
            Granularity::Monthly => anchor.format("%b").to_string(),
            Granularity::Yearly => anchor.year().to_string(),
        }
    }

    /// Start of the period containing `now`. Weeks start on Sunday.
    pub fn period_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let start = match self {
            Granularity::Daily => today,
            Granularity::Weekly => {
                today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
            }
            Granularity::Monthly | Granularity::Yearly => self.bucket_start(today),
        };
        start.and_time(NaiveTime::MIN).and_utc()
    }
}

/// Sunday-based week number: week 1 runs from Jan 1 to the first Saturday.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let jan1 = date - Duration::days(i64::from(date.ordinal0()));
    (date.ordinal() + jan1.weekday().num_days_from_sunday()).div_ceil(7)
}

/// The order fields the aggregator reads
#[derive(Debug, Clone)]
pub struct OrderSnapshot {
    pub id: i32,
    pub order_number: String,
    pub status: String,
    pub quantity: i64,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<orders::Model> for OrderSnapshot {
    fn from(order: orders::Model) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            status: order.status,
            quantity: i64::from(order.quantity),
            total_amount: order.total_amount,
            created_at: order.created_at.with_timezone(&Utc),
        }
    }
}

/// The product fields the aggregator reads
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub units_sold: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<products::Model> for ProductSnapshot {
    fn from(product: products::Model) -> Self {
        Self {
            id: product.id,
            title: product.title,
            category: product.category,
            units_sold: i64::from(product.units_sold),
            created_at: product.created_at.with_timezone(&Utc),
            updated_at: product.updated_at.with_timezone(&Utc),
        }
    }
}

pub fn summarize(
    now: DateTime<Utc>,
    granularity: Granularity,
    orders: &[OrderSnapshot],
    products: &[ProductSnapshot],
) -> DashboardSummary {
    let mut total_revenue = 0.0;
    let mut total_units = 0i64;
    let mut pending_orders = 0;
    let mut by_period: HashMap<String, (f64, i64)> = HashMap::new();

    for order in orders {
        total_revenue += order.total_amount;
        total_units += order.quantity;
        if order.status == OrderStatus::Pending.as_str() {
            pending_orders += 1;
        }
        let bucket = by_period
            .entry(granularity.bucket_key(order.created_at.date_naive()))
            .or_insert((0.0, 0));
        bucket.0 += order.total_amount;
        bucket.1 += order.quantity;
    }

    let revenue_trend = build_trend(now, granularity, &by_period);
    let (revenue_growth, units_growth) = match revenue_trend.as_slice() {
        [.., prev, last] => (
            growth_percent(prev.revenue, last.revenue),
            growth_percent(prev.units as f64, last.units as f64),
        ),
        _ => (0.0, 0.0),
    };

    let period_start = granularity.period_start(now);
    let new_products = products
        .iter()
        .filter(|p| p.created_at >= period_start && p.created_at <= now)
        .count();

    DashboardSummary {
        total_revenue,
        total_units,
        total_products: products.len(),
        total_orders: orders.len(),
        revenue_trend,
        category_performance: category_rollup(products),
        pending_orders,
        new_products,
        revenue_growth,
        units_growth,
        recent_activity: recent_activity(orders, products),
    }
}

fn build_trend(
    now: DateTime<Utc>,
    granularity: Granularity,
    by_period: &HashMap<String, (f64, i64)>,
) -> Vec<TrendPoint> {
    let mut anchor = now.date_naive();
    let mut trend = Vec::with_capacity(granularity.periods() as usize);

    for _ in 0..granularity.periods() {
        let key = granularity.bucket_key(anchor);
        let (revenue, units) = by_period.get(&key).copied().unwrap_or((0.0, 0));
        trend.push(TrendPoint {
            name: granularity.label(anchor, &key),
            revenue,
            units,
        });
        anchor = granularity.previous(anchor);
    }

    trend.reverse();
    trend
}

/// Percentage change from `prev` to `last`, one decimal place.
/// An empty previous period reports 0 rather than an unbounded value.
pub fn growth_percent(prev: f64, last: f64) -> f64 {
    if prev == 0.0 {
        return 0.0;
    }

    let (Some(prev), Some(last)) = (Decimal::from_f64(prev), Decimal::from_f64(last)) else {
        return 0.0;
    };

    ((last - prev) / prev * dec!(100))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

pub fn category_rollup(products: &[ProductSnapshot]) -> Vec<CategoryPerformance> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for product in products {
        *totals.entry(product.category.as_str()).or_insert(0) += product.units_sold;
    }

    totals
        .into_iter()
        .map(|(name, value)| CategoryPerformance {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub fn recent_activity(orders: &[OrderSnapshot], products: &[ProductSnapshot]) -> Vec<ActivityItem> {
    let mut recent_orders: Vec<&OrderSnapshot> = orders.iter().collect();
    recent_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut recent_products: Vec<&ProductSnapshot> = products.iter().collect();
    recent_products.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut activity: Vec<ActivityItem> = recent_orders
        .into_iter()
        .take(RECENT_PER_KIND)
        .map(|order| ActivityItem::Order {
            id: order.id,
            order_id: order.order_number.clone(),
            status: order.status.clone(),
            amount: order.total_amount,
            created_at: order.created_at,
        })
        .chain(
            recent_products
                .into_iter()
                .take(RECENT_PER_KIND)
                .map(|product| ActivityItem::Product {
                    id: product.id,
                    title: product.title.clone(),
                    updated_at: product.updated_at,
                }),
        )
        .collect();

    activity.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    activity.truncate(RECENT_ACTIVITY_LIMIT);
    activity
}
