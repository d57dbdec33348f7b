use tonegauge_core::{
    AppConfig, HomeLayout, ProviderConfig, RandomProviderConfig, RemoteProviderConfig,
};

/// Out of the box we talk to a local analysis service.
pub fn default_app_config() -> AppConfig {
    AppConfig {
        provider: ProviderConfig::Remote(RemoteProviderConfig::default()),
        home: HomeLayout::default(),
    }
}

/// Offline demo settings: random results after a short pause so the loading
/// state is visible.
pub fn demo_provider_config() -> ProviderConfig {
    ProviderConfig::Random(RandomProviderConfig {
        seed: None,
        latency_ms: 600,
    })
}
