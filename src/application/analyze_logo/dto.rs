use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Payload accepted by `POST /analyze-logo`.
///
/// `image` is an encoded image (usually base64) and `colors` is whatever palette
/// the caller extracted. Neither is inspected by this service; only their JSON
/// types are checked when the body is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeLogoRequest {
    pub image: String,
    #[ts(type = "unknown[]")]
    pub colors: Vec<serde_json::Value>,
}
