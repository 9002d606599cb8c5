use async_trait::async_trait;

use crate::errors::TrackerError;

use super::analysis_record::AnalysisData;

/// External service turning free-text product input into an analysis payload.
///
/// Implementations report any failure as an error; a failed analysis never
/// produces a record.
#[async_trait]
pub trait IngredientAnalyzer: Send + Sync {
    async fn analyze(&self, input: &str) -> Result<AnalysisData, TrackerError>;
}
