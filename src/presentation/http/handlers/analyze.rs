use crate::{
    application::analyze_logo::{dto::AnalyzeLogoRequest, use_case::AnalyzeLogoUseCase},
    domain::logo::entity::AnalyzeLogoResponse,
    presentation::http::{errors::AppError, extractors::AppJson, state::AppState},
};
use axum::extract::State;

/// `POST /analyze-logo`
///
/// The body is shape-checked by [`AppJson`] before this runs; malformed
/// payloads never reach the analyzer.
pub async fn analyze_logo(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeLogoRequest>,
) -> Result<AppJson<AnalyzeLogoResponse>, AppError> {
    let use_case = AnalyzeLogoUseCase::new(state.analyzer.clone());
    let analysis = use_case.execute(request).await?;
    Ok(AppJson(analysis))
}
