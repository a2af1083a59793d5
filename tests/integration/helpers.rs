use ai_service::{
    config::Config,
    domain::logo::{entity::AnalyzeLogoResponse, errors::AnalysisError},
    infrastructure::analysis::{disabled_analyzer::DisabledAnalyzer, traits::LogoAnalyzer},
    presentation::http::{routes::create_app, state::AppState},
};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

/// Stands in for a licensed analyzer so the success contract can be exercised.
#[derive(Clone)]
pub struct LicensedStubAnalyzer;

#[async_trait]
impl LogoAnalyzer for LicensedStubAnalyzer {
    async fn analyze(
        &self,
        _image: &str,
        colors: &[serde_json::Value],
    ) -> Result<AnalyzeLogoResponse, AnalysisError> {
        Ok(AnalyzeLogoResponse {
            style: "stub".to_string(),
            complexity: colors.len() as i32,
            has_text: false,
            recommended_categories: vec!["general".to_string()],
        })
    }
}

pub struct TestApp {
    pub app: Router,
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Config::default()
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(DisabledAnalyzer::new()), test_config())
}

pub fn spawn_app_with(analyzer: Arc<dyn LogoAnalyzer>, config: Config) -> TestApp {
    let state = AppState { analyzer, config };
    TestApp {
        app: create_app(state),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

/// Reads `{ "detail": ... }` and returns the detail string.
pub async fn read_detail(res: axum::response::Response) -> String {
    let body: serde_json::Value = read_json(res).await;
    body["detail"]
        .as_str()
        .unwrap_or_else(|| panic!("missing string detail in {}", body))
        .to_string()
}
