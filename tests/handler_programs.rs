mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_programs_in_order() {
    let server = common::create_test_server(common::sample_programs());

    let response = server.get("/api/programs").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let ids: Vec<_> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["fk", "amz", "cl"]);
}

#[tokio::test]
async fn test_get_program_hides_credential() {
    let server = common::create_test_server(common::sample_programs());

    let response = server.get("/api/programs/cl").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["merchant"], "cuelinks");
    assert_eq!(json["has_credential"], true);
    assert_eq!(json["sub_identifier"], "ch1");
    assert!(json.get("credential").is_none());
}

#[tokio::test]
async fn test_get_program_not_found() {
    let server = common::create_test_server(vec![]);

    let response = server.get("/api/programs/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_create_program_then_resolve_with_it() {
    let server = common::create_test_server(vec![]);

    let response = server
        .post("/api/programs")
        .json(&json!({
            "id": "my",
            "merchant": "myntra",
            "affiliate_id": "my-aff"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], "my");
    assert_eq!(json["active"], true);
    assert_eq!(json["has_credential"], false);

    let resolved = server
        .post("/api/resolve")
        .json(&json!({ "urls": [{ "url": "https://www.myntra.com/p/1" }] }))
        .await
        .json::<Value>();
    assert_eq!(
        resolved["items"][0]["url"],
        "https://www.myntra.com/p/1?aff_id=my-aff"
    );
}

#[tokio::test]
async fn test_create_program_generates_id() {
    let server = common::create_test_server(vec![]);

    let response = server
        .post("/api/programs")
        .json(&json!({ "merchant": "ajio", "affiliate_id": "a1" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"].as_str().unwrap().len(), 12);
}

#[tokio::test]
async fn test_create_program_duplicate_id() {
    let server = common::create_test_server(common::sample_programs());

    let response = server
        .post("/api/programs")
        .json(&json!({ "id": "fk", "merchant": "flipkart", "affiliate_id": "other" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_program_invalid_base_url() {
    let server = common::create_test_server(vec![]);

    let response = server
        .post("/api/programs")
        .json(&json!({
            "merchant": "cuelinks",
            "affiliate_id": "1",
            "base_url": "not a url"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_deactivate_program_stops_tagging() {
    let server = common::create_test_server(vec![common::flipkart_program()]);

    let response = server
        .patch("/api/programs/fk")
        .json(&json!({ "active": false }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["active"], false);

    let resolved = server
        .post("/api/resolve")
        .json(&json!({ "urls": [{ "url": "https://www.flipkart.com/item/1" }] }))
        .await
        .json::<Value>();
    assert_eq!(resolved["items"][0]["strategy"], "unchanged");
}

#[tokio::test]
async fn test_patch_null_clears_tracking_param() {
    let server = common::create_test_server(vec![common::flipkart_program()]);

    let response = server
        .patch("/api/programs/fk")
        .json(&json!({ "tracking_param": null }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert!(json["tracking_param"].is_null());
    assert_eq!(json["affiliate_id"], "partner42");
}

#[tokio::test]
async fn test_patch_missing_program() {
    let server = common::create_test_server(vec![]);

    let response = server
        .patch("/api/programs/missing")
        .json(&json!({ "active": true }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_program() {
    let server = common::create_test_server(common::sample_programs());

    server
        .delete("/api/programs/amz")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get("/api/programs/amz")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .delete("/api/programs/amz")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
