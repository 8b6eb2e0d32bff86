use crate::structs::analysis_result::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Envelope written by `analyze --export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            result,
        }
    }
}
