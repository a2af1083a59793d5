use crate::domain::logo::{entity::AnalyzeLogoResponse, errors::AnalysisError};
use async_trait::async_trait;

/// Capability that turns an encoded logo and its palette into an analysis.
///
/// The licensed implementation lives outside this repository. Anything that
/// implements this trait can be plugged into [`AppState`](crate::presentation::http::state::AppState)
/// without changing the HTTP contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        image: &str,
        colors: &[serde_json::Value],
    ) -> Result<AnalyzeLogoResponse, AnalysisError>;
}
