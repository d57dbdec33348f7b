use std::sync::Arc;

use tonegauge_core::ProviderConfig;
use tonegauge_engine::controller::HomeController;
use tonegauge_engine::traits::AnalysisProvider;
use tonegauge_providers::analyze::validate_endpoint;

use crate::random::RandomAnalysisProvider;
use crate::remote::RemoteAnalysisProvider;

/// Picks the analysis backend from config, so call sites never name one.
pub fn build_provider(cfg: &ProviderConfig) -> anyhow::Result<Arc<dyn AnalysisProvider>> {
    let provider: Arc<dyn AnalysisProvider> = match cfg {
        ProviderConfig::Remote(remote) => {
            validate_endpoint(&remote.endpoint)?;
            Arc::new(RemoteAnalysisProvider::new(remote))
        }
        ProviderConfig::Random(random) => Arc::new(RandomAnalysisProvider::new(random)),
    };
    log::info!("analysis provider: {}", provider.name());
    Ok(provider)
}

/// A fresh home screen wired to the configured provider.
pub fn build_home_controller(cfg: &ProviderConfig) -> anyhow::Result<HomeController> {
    Ok(HomeController::new(build_provider(cfg)?))
}
