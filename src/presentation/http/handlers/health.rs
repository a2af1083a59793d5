use crate::domain::logo::entity::HealthStatus;
use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::limited()))
}
