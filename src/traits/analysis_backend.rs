use crate::errors::NotelyzerResult;
use crate::structs::analysis_result::AnalysisResult;
use async_trait::async_trait;

/// Seam for the pluggable advanced backend. The production implementation is
/// the HTTP adapter; tests substitute stub and failing backends.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Run a deep analysis of `text`, returning an advanced result.
    async fn analyze_text(&self, text: &str) -> NotelyzerResult<AnalysisResult>;

    /// Cheap availability probe.
    async fn health_check(&self) -> NotelyzerResult<()>;
}
