//! Analysis capability seam.
//!
//! The view-state machine only ever talks to this trait; the shipped
//! implementation is [`CannedAnalysis`], but an HTTP client or a local model
//! can stand behind the same contract.

pub mod canned;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{PregnancyReport, SkinReport, SkinSample, VitalsRecord};

pub use canned::CannedAnalysis;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),
    #[error("analysis rejected the submission: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze_skin(&self, sample: SkinSample) -> Result<SkinReport, AnalysisError>;

    async fn assess_pregnancy(&self, record: VitalsRecord)
        -> Result<PregnancyReport, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OfflineProvider;

    #[async_trait]
    impl AnalysisProvider for OfflineProvider {
        async fn analyze_skin(&self, _sample: SkinSample) -> Result<SkinReport, AnalysisError> {
            Err(AnalysisError::Unavailable("no backend configured".into()))
        }

        async fn assess_pregnancy(
            &self,
            _record: VitalsRecord,
        ) -> Result<PregnancyReport, AnalysisError> {
            Err(AnalysisError::Unavailable("no backend configured".into()))
        }
    }

    #[tokio::test]
    async fn failing_provider_surfaces_a_readable_error() {
        let provider = OfflineProvider;
        let sample = SkinSample {
            file_name: "lesion.png".to_string(),
            bytes: vec![0; 4],
        };

        let err = provider.analyze_skin(sample).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "analysis service unavailable: no backend configured"
        );
    }
}
