use crate::helpers::{
    LicensedStubAnalyzer, expect_status, json_post, read_detail, read_json, send, spawn_app,
    spawn_app_with, test_config,
};
use ai_service::domain::logo::errors::COMMERCIAL_LICENSE_NOTICE;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use std::sync::Arc;

const NOTICE: &str =
    "Advanced AI analysis requires commercial license. Contact contact@novumsolvo.com";

#[test]
fn notice_text_is_exact() {
    assert_eq!(COMMERCIAL_LICENSE_NOTICE, NOTICE);
}

#[tokio::test]
async fn well_formed_request_is_declined_with_501() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_post(
            "/analyze-logo",
            r##"{"image":"abc123","colors":["#fff","#000"]}"##,
        ),
    )
    .await;
    let res = expect_status(res, StatusCode::NOT_IMPLEMENTED).await;

    let body: serde_json::Value = read_json(res).await;
    assert_eq!(body, serde_json::json!({ "detail": NOTICE }));
}

#[tokio::test]
async fn empty_values_are_still_shape_valid() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_post("/analyze-logo", r#"{"image":"","colors":[]}"#),
    )
    .await;
    let res = expect_status(res, StatusCode::NOT_IMPLEMENTED).await;

    assert_eq!(read_detail(res).await, NOTICE);
}

#[tokio::test]
async fn refusal_does_not_depend_on_input() {
    let test_app = spawn_app();
    let bodies = [
        r##"{"image":"iVBORw0KGgoAAAANSUhEUgAAAAE=","colors":[{"hex":"#ff0000","population":12}]}"##,
        r#"{"image":"not base64 at all","colors":[1, null, true, [2]]}"#,
        r#"{"image":"x","colors":[],"extra":"ignored"}"#,
        r#"{"image":"a","colors":[1e400, -1e400, 123456789012345678901234567890]}"#,
        r#"{"image":"a","image":"b","colors":[]}"#,
        r#"{"image":"\ud800","colors":["\udfff"]}"#,
    ];

    for body in bodies {
        let res = send(&test_app.app, json_post("/analyze-logo", body)).await;
        let res = expect_status(res, StatusCode::NOT_IMPLEMENTED).await;
        assert_eq!(read_detail(res).await, NOTICE, "body: {}", body);
    }
}

#[tokio::test]
async fn missing_image_is_a_validation_error() {
    let test_app = spawn_app();

    let res = send(
        &test_app.app,
        json_post("/analyze-logo", r##"{"colors":["#fff"]}"##),
    )
    .await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;

    let detail = read_detail(res).await;
    assert_ne!(detail, NOTICE);
    assert!(detail.contains("image"), "detail: {}", detail);
}

#[tokio::test]
async fn missing_colors_is_a_validation_error() {
    let test_app = spawn_app();

    let res = send(&test_app.app, json_post("/analyze-logo", r#"{"image":"abc"}"#)).await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert!(read_detail(res).await.contains("colors"));
}

#[tokio::test]
async fn wrong_field_types_are_validation_errors() {
    let test_app = spawn_app();
    let bodies = [
        r##"{"image":123,"colors":["#fff"]}"##,
        r##"{"image":null,"colors":["#fff"]}"##,
        r##"{"image":"abc","colors":"#fff"}"##,
        r#"{"image":"abc","colors":null}"#,
        r#"{"image":["abc"],"colors":[]}"#,
    ];

    for body in bodies {
        let res = send(&test_app.app, json_post("/analyze-logo", body)).await;
        assert_eq!(
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body: {}",
            body
        );
        assert_ne!(read_detail(res).await, NOTICE);
    }
}

#[tokio::test]
async fn invalid_json_is_a_bad_request() {
    let test_app = spawn_app();

    let res = send(&test_app.app, json_post("/analyze-logo", r#"{"image":"#)).await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;

    assert_ne!(read_detail(res).await, NOTICE);
}

#[tokio::test]
async fn body_without_content_type_is_read_as_json() {
    let test_app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/analyze-logo")
        .body(Body::from(r#"{"image":"","colors":[]}"#))
        .unwrap();

    let res = send(&test_app.app, req).await;
    let res = expect_status(res, StatusCode::NOT_IMPLEMENTED).await;

    assert_eq!(read_detail(res).await, NOTICE);
}

#[tokio::test]
async fn shape_errors_without_content_type_are_still_validation_errors() {
    let test_app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/analyze-logo")
        .body(Body::from(r#"{"image":123,"colors":[]}"#))
        .unwrap();

    let res = send(&test_app.app, req).await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert_ne!(read_detail(res).await, NOTICE);
}

#[tokio::test]
async fn explicit_non_json_media_type_is_rejected() {
    let test_app = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/analyze-logo")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"image":"","colors":[]}"#))
        .unwrap();

    let res = send(&test_app.app, req).await;
    let res = expect_status(res, StatusCode::UNSUPPORTED_MEDIA_TYPE).await;

    assert_ne!(read_detail(res).await, NOTICE);
}

#[tokio::test]
async fn oversized_body_is_rejected_before_analysis() {
    let mut config = test_config();
    config.max_body_bytes = 64;
    let test_app = spawn_app_with(Arc::new(LicensedStubAnalyzer), config);

    let body = format!(r#"{{"image":"{}","colors":[]}}"#, "A".repeat(256));
    let res = send(&test_app.app, json_post("/analyze-logo", &body)).await;
    let res = expect_status(res, StatusCode::PAYLOAD_TOO_LARGE).await;

    assert!(!read_detail(res).await.is_empty());
}

#[tokio::test]
async fn substituted_analyzer_returns_success_contract() {
    let test_app = spawn_app_with(Arc::new(LicensedStubAnalyzer), test_config());

    let res = send(
        &test_app.app,
        json_post("/analyze-logo", r##"{"image":"abc","colors":["#fff","#000"]}"##),
    )
    .await;
    let res = expect_status(res, StatusCode::OK).await;

    let body: serde_json::Value = read_json(res).await;
    assert_eq!(
        body,
        serde_json::json!({
            "style": "stub",
            "complexity": 2,
            "hasText": false,
            "recommendedCategories": ["general"]
        })
    );
}
