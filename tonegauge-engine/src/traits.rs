use async_trait::async_trait;
use tonegauge_core::{AnalysisResult, ProviderError};

/// Anything that can turn text into an [`AnalysisResult`].
///
/// Implementations make a single attempt per call; retrying is the user's
/// decision (they submit again).
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn submit(&self, text: &str) -> Result<AnalysisResult, ProviderError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

