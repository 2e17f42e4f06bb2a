mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use crate::common::{TestApp, insert_order};

#[tokio::test]
async fn test_empty_summary() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha", "asha@example.com").await;

    let (status, body) = app.get("/api/dashboard/summary", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalRevenue"], 0.0);
    assert_eq!(body["totalUnits"], 0);
    assert_eq!(body["totalProducts"], 0);
    assert_eq!(body["totalOrders"], 0);
    assert_eq!(body["revenueGrowth"], 0.0);
    assert!(body["categoryPerformance"].as_array().unwrap().is_empty());
    assert!(body["recentActivity"].as_array().unwrap().is_empty());

    let trend = body["revenueTrend"].as_array().unwrap();
    assert_eq!(trend.len(), 6);
    assert!(trend.iter().all(|p| p["revenue"] == 0.0 && p["units"] == 0));
}

#[tokio::test]
async fn test_trend_length_per_range() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha", "asha@example.com").await;

    for (range, expected) in [("daily", 7), ("weekly", 8), ("monthly", 6), ("yearly", 5), ("bogus", 6)] {
        let (status, body) = app
            .get(&format!("/api/dashboard/summary?range={}", range), &token)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["revenueTrend"].as_array().unwrap().len(),
            expected,
            "range {}",
            range
        );
    }
}

#[tokio::test]
async fn test_summary_totals_and_activity() {
    let app = TestApp::new().await;
    let (token, seller_id) = app.register("Asha", "asha@example.com").await;
    let (other, other_id) = app.register("Ravi", "ravi@example.com").await;

    let shirt = app.create_product(&token, "Linen shirt", "clothing").await;
    app.create_product(&token, "Desk lamp", "home").await;
    let foreign = app.create_product(&other, "Novel", "books").await;

    let now = Utc::now();
    insert_order(&app.db, seller_id, shirt, "ORD-1", 1, 100.0, "pending", now).await;
    insert_order(&app.db, seller_id, shirt, "ORD-2", 2, 250.0, "delivered", now - Duration::minutes(5)).await;
    insert_order(&app.db, other_id, foreign, "ORD-3", 9, 9000.0, "pending", now).await;

    let (status, body) = app.get("/api/dashboard/summary?range=daily", &token).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["totalRevenue"], 350.0);
    assert_eq!(body["totalUnits"], 3);
    assert_eq!(body["totalOrders"], 2);
    assert_eq!(body["totalProducts"], 2);
    assert_eq!(body["pendingOrders"], 1);
    assert_eq!(body["newProducts"], 2);

    let categories = body["categoryPerformance"].as_array().unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["clothing", "home"]);

    let activity = body["recentActivity"].as_array().unwrap();
    assert_eq!(activity.len(), 4);
    assert!(activity.iter().any(|a| a["type"] == "order" && a["orderId"] == "ORD-1"));
    assert!(activity.iter().any(|a| a["type"] == "product" && a["title"] == "Desk lamp"));
    assert!(activity.iter().all(|a| a["orderId"] != "ORD-3"));
}
