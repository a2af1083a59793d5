use crate::{
    application::analyze_logo::dto::AnalyzeLogoRequest,
    domain::logo::{entity::AnalyzeLogoResponse, errors::AnalysisError},
    infrastructure::analysis::traits::LogoAnalyzer,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Hands a logo analysis request to whichever analyzer is configured.
///
/// The use case owns no logic of its own: the request is passed through
/// untouched and the analyzer's answer (or refusal) is returned as-is. Request
/// content never reaches the logs.
pub struct AnalyzeLogoUseCase {
    analyzer: Arc<dyn LogoAnalyzer>,
}

impl AnalyzeLogoUseCase {
    pub fn new(analyzer: Arc<dyn LogoAnalyzer>) -> Self {
        Self { analyzer }
    }

    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        request: AnalyzeLogoRequest,
    ) -> Result<AnalyzeLogoResponse, AnalysisError> {
        let result = self
            .analyzer
            .analyze(&request.image, &request.colors)
            .await;

        if let Err(err) = &result {
            debug!(reason = ?err, "Logo analysis declined");
        }
        result
    }
}
