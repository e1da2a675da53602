mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_detect_known_merchants() {
    let server = common::create_test_server(vec![]);

    for (url, merchant, param) in [
        ("https://www.amazon.in/dp/B0123456789", "amazon", "tag"),
        ("https://amzn.to/abc", "amazon", "tag"),
        ("https://www.flipkart.com/item/1", "flipkart", "affid"),
        ("https://www.myntra.com/p/1", "myntra", "aff_id"),
        ("https://www.nykaa.com/lipstick", "nykaa", "aff_id"),
        ("https://shop.example.com/", "other", "ref"),
    ] {
        let response = server.get("/api/detect").add_query_param("url", url).await;

        response.assert_status_ok();

        let json = response.json::<Value>();
        assert_eq!(json["url"], url);
        assert_eq!(json["merchant"], merchant, "url: {url}");
        assert_eq!(json["default_tracking_param"], param, "url: {url}");
    }
}

#[tokio::test]
async fn test_detect_malformed_url_is_other() {
    let server = common::create_test_server(vec![]);

    let response = server
        .get("/api/detect")
        .add_query_param("url", "definitely not a url")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["merchant"], "other");
}

#[tokio::test]
async fn test_detect_missing_url_rejected() {
    let server = common::create_test_server(vec![]);

    let response = server.get("/api/detect").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clean_strips_tracking_params() {
    let server = common::create_test_server(vec![]);

    let response = server
        .post("/api/clean")
        .json(&json!({ "url": "https://www.myntra.com/p/1?color=red&utm_source=x&fbclid=abc" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["cleaned"], "https://www.myntra.com/p/1?color=red");
    assert_eq!(json["changed"], true);
}

#[tokio::test]
async fn test_clean_shortens_marketplace_url() {
    let server = common::create_test_server(vec![]);

    let response = server
        .post("/api/clean")
        .json(&json!({ "url": "https://www.amazon.in/dp/B0123456789/ref=xyz?tag=old&utm_source=x" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["cleaned"],
        "https://www.amazon.in/dp/B012345678"
    );
}

#[tokio::test]
async fn test_clean_leaves_clean_url_alone() {
    let server = common::create_test_server(vec![]);

    let response = server
        .post("/api/clean")
        .json(&json!({ "url": "https://www.flipkart.com/item/1?pid=42" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["cleaned"], "https://www.flipkart.com/item/1?pid=42");
    assert_eq!(json["changed"], false);
}

#[tokio::test]
async fn test_clean_empty_url_rejected() {
    let server = common::create_test_server(vec![]);

    let response = server.post("/api/clean").json(&json!({ "url": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
