use thiserror::Error;

pub const COMMERCIAL_LICENSE_NOTICE: &str =
    "Advanced AI analysis requires commercial license. Contact contact@novumsolvo.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Analysis is switched off in this build.
    #[error("{}", COMMERCIAL_LICENSE_NOTICE)]
    FeatureUnavailable,
    #[error("Analysis failed: {0}")]
    Failed(String),
}
