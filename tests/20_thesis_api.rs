mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// Request-shape checks that hold with or without a reachable database:
// both run their validation before the store is touched.

#[tokio::test]
async fn create_rejects_empty_title() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/thesis", server.base_url))
        .json(&json!({
            "title": "   ",
            "added_by": "7f0a3a1e-53a5-4f0c-9e1a-0e2b3c4d5e6f",
            "professor_id": "8d1b4c2f-64b6-4a1d-8f2b-1f3c4d5e6f70"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body.get("code").and_then(|v| v.as_str()),
        Some("VALIDATION_ERROR"),
        "unexpected body: {}",
        body
    );

    Ok(())
}

#[tokio::test]
async fn create_rejects_oversized_body() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Development default caps request bodies at 10MB
    let res = client
        .post(format!("{}/api/thesis", server.base_url))
        .json(&json!({
            "title": "Clustering i fjaleve nga rrjete sociale",
            "description": "x".repeat(11 * 1024 * 1024),
            "added_by": "7f0a3a1e-53a5-4f0c-9e1a-0e2b3c4d5e6f",
            "professor_id": "8d1b4c2f-64b6-4a1d-8f2b-1f3c4d5e6f70"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}

#[tokio::test]
async fn by_status_rejects_unknown_status() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/thesis/status/approved", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body.get("code").and_then(|v| v.as_str()),
        Some("BAD_REQUEST"),
        "unexpected body: {}",
        body
    );

    Ok(())
}
