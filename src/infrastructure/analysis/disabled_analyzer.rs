use super::traits::LogoAnalyzer;
use crate::domain::logo::{entity::AnalyzeLogoResponse, errors::AnalysisError};
use async_trait::async_trait;

/// Analyzer shipped with the public build. Refuses every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAnalyzer;

impl DisabledAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LogoAnalyzer for DisabledAnalyzer {
    async fn analyze(
        &self,
        _image: &str,
        _colors: &[serde_json::Value],
    ) -> Result<AnalyzeLogoResponse, AnalysisError> {
        Err(AnalysisError::FeatureUnavailable)
    }
}
