use crate::services::analyzer;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::analysis_backend::AnalysisBackend;

/// Chooses between the advanced backend and the local analyzer.
///
/// The advanced path must never surface a hard failure: any backend error is
/// logged as a warning and recovered by running the basic analysis. Callers
/// always receive a usable `AnalysisResult`.
pub struct AnalysisCoordinator;

impl AnalysisCoordinator {
    pub async fn get_analysis<B: AnalysisBackend>(
        text: &str,
        advanced_available: bool,
        backend: &B,
    ) -> AnalysisResult {
        if !advanced_available {
            return analyzer::analyze(text);
        }

        match backend.analyze_text(text).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("⚠️ Advanced analysis failed, falling back to basic mode: {e}");
                analyzer::analyze(text)
            }
        }
    }
}
