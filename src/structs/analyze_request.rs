use serde::{Deserialize, Serialize};

/// Request body for the backend's `POST /analyze` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}
