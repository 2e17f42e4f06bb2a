mod common;

use axum::http::StatusCode;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha", "asha@example.com").await;

    let (status, body) = app
        .put(
            "/api/profile",
            &token,
            json!({
                "storeName": "Asha Threads",
                "socialLinks": { "instagram": "@ashathreads" },
                "bankDetails": { "ifscCode": "HDFC0001234" },
                "onboardingStep": 3,
                "email": "hijack@example.com",
                "role": "admin"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Profile updated");
    assert_eq!(body["user"]["storeName"], "Asha Threads");
    assert_eq!(body["user"]["socialLinks"]["instagram"], "@ashathreads");
    assert_eq!(body["user"]["socialLinks"]["youtube"], "");
    assert_eq!(body["user"]["bankDetails"]["ifscCode"], "HDFC0001234");
    assert_eq!(body["user"]["onboardingStep"], 3);
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert_eq!(body["user"]["role"], "seller");

    let (_, me) = app.get("/api/auth/me", &token).await;
    assert_eq!(me["storeName"], "Asha Threads");
}

#[tokio::test]
async fn test_upload_document() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha", "asha@example.com").await;

    let file = format!("data:application/pdf;base64,{}", BASE64.encode(b"%PDF-1.4 pan card"));
    let (status, body) = app
        .post("/api/profile/documents", &token, json!({ "file": file, "type": "pan" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Document uploaded");

    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/documents/pan/"));
    assert!(url.ends_with(".pdf"));

    let relative = url.trim_start_matches("/uploads/");
    let stored = std::fs::read(app.uploads.path().join(relative)).unwrap();
    assert_eq!(stored, b"%PDF-1.4 pan card");

    let (_, profile) = app.put("/api/profile", &token, json!({})).await;
    assert_eq!(profile["user"]["documents"]["pan"], url);
    assert_eq!(profile["user"]["documents"]["gst"], "");
}

#[tokio::test]
async fn test_upload_document_validation() {
    let app = TestApp::new().await;
    let (token, _) = app.register("Asha", "asha@example.com").await;

    let (status, body) = app
        .post("/api/profile/documents", &token, json!({ "type": "pan" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "File and type are required");

    let (status, _) = app
        .post(
            "/api/profile/documents",
            &token,
            json!({ "file": BASE64.encode(b"%PDF"), "type": "passport" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/profile/documents",
            &token,
            json!({ "file": "***not base64***", "type": "gst" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
