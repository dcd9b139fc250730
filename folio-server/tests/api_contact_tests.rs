//! Integration tests for the contact-form handler
mod common;

use crate::common::create_test_app_state;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use folio_server::routes::build_router;

fn contact_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_submit_contact_success() {
    let state = create_test_app_state();
    let app = build_router(state);

    let payload = json!({
        "name": "Tussar",
        "email": "tussar@example.com",
        "message": "Testing contact form",
    });

    let response = app
        .oneshot(contact_request(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Thanks for reaching out");
}

#[tokio::test]
async fn test_submit_contact_does_not_echo_submission() {
    let state = create_test_app_state();
    let app = build_router(state);

    let payload = json!({
        "name": "Tussar",
        "email": "tussar@example.com",
        "message": "Testing contact form",
    });

    let response = app
        .oneshot(contact_request(payload.to_string()))
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert!(!text.contains("Tussar"));
    assert!(!text.contains("tussar@example.com"));
    assert!(!text.contains("Testing contact form"));
}

#[tokio::test]
async fn test_submit_contact_missing_field_each() {
    for field in ["name", "email", "message"] {
        let mut payload = json!({
            "name": "Tussar",
            "email": "tussar@example.com",
            "message": "Testing contact form",
        });
        payload.as_object_mut().unwrap().remove(field);

        let state = create_test_app_state();
        let app = build_router(state);

        let response = app
            .oneshot(contact_request(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {field}");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "All fields are required");
    }
}

#[tokio::test]
async fn test_submit_contact_empty_field_each() {
    for field in ["name", "email", "message"] {
        let mut payload = json!({
            "name": "Tussar",
            "email": "tussar@example.com",
            "message": "Testing contact form",
        });
        payload[field] = json!("");

        let state = create_test_app_state();
        let app = build_router(state);

        let response = app
            .oneshot(contact_request(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "empty {field}");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "All fields are required");
    }
}

#[tokio::test]
async fn test_submit_contact_null_field_rejected() {
    let state = create_test_app_state();
    let app = build_router(state);

    let payload = json!({
        "name": "Tussar",
        "email": null,
        "message": "Hello",
    });

    let response = app
        .oneshot(contact_request(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_contact_numeric_field_rejected() {
    // Dynamic-language falsy zero: not a string, counts as missing
    let state = create_test_app_state();
    let app = build_router(state);

    let payload = json!({
        "name": 0,
        "email": "tussar@example.com",
        "message": "Hello",
    });

    let response = app
        .oneshot(contact_request(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "All fields are required");
}

#[tokio::test]
async fn test_submit_contact_malformed_json_never_500() {
    let state = create_test_app_state();
    let app = build_router(state);

    let response = app
        .oneshot(contact_request("{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "All fields are required");
}

#[tokio::test]
async fn test_submit_contact_missing_content_type_rejected() {
    let state = create_test_app_state();
    let app = build_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::from(
            json!({
                "name": "Tussar",
                "email": "tussar@example.com",
                "message": "Testing contact form",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
