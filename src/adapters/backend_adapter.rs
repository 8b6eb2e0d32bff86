use crate::config::constants::{timeout_duration, ANALYZE_ENDPOINT, HEALTH_ENDPOINT};
use crate::errors::{NotelyzerError, NotelyzerResult};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::backend_config::BackendConfig;
use crate::traits::analysis_backend::AnalysisBackend;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// HTTP client for the advanced analysis backend.
pub struct BackendAdapter {
    client: Client,
    base_url: String,
}

impl BackendAdapter {
    pub fn from_config(config: &BackendConfig) -> NotelyzerResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl AnalysisBackend for BackendAdapter {
    async fn analyze_text(&self, text: &str) -> NotelyzerResult<AnalysisResult> {
        let url = self.endpoint_url(ANALYZE_ENDPOINT);
        let request_body = AnalyzeRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Network error during analyze request: {e}");
                NotelyzerError::network_error("analyze request", None, &e.to_string())
            })?;

        match response.status() {
            StatusCode::OK => {
                let result: AnalysisResult = response.json().await.map_err(|e| {
                    log::error!("Failed to parse analyze response: {e}");
                    NotelyzerError::parse_error("analyze response", &e.to_string())
                })?;
                Ok(result)
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                log::error!("Analyze request failed with status {status}: {error_text}");
                Err(NotelyzerError::network_error(
                    "analyze request",
                    Some(status.as_u16()),
                    &error_text,
                ))
            }
        }
    }

    async fn health_check(&self) -> NotelyzerResult<()> {
        let url = self.endpoint_url(HEALTH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NotelyzerError::network_error("health check", None, &e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(NotelyzerError::network_error(
                "health check",
                Some(response.status().as_u16()),
                "Backend did not report healthy",
            ))
        }
    }
}
