use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const HEALTH_STATUS_OK: &str = "ok";
pub const HEALTH_MESSAGE: &str = "Public AI service - Limited functionality";

/// Result of a successful logo analysis.
///
/// No analyzer in this build produces one. The shape is kept as the wire
/// contract for a licensed [`LogoAnalyzer`](crate::infrastructure::analysis::traits::LogoAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeLogoResponse {
    pub style: String,
    pub complexity: i32,
    pub has_text: bool,
    pub recommended_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    /// The only status this service ever reports.
    pub fn limited() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
