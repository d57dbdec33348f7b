use anyhow::{Context, anyhow};
use tonegauge_core::{
    AppConfig, ProviderConfig, ProviderKind, RandomProviderConfig, RemoteProviderConfig,
};

pub const ENV_PROVIDER: &str = "TONEGAUGE_PROVIDER";
pub const ENV_ENDPOINT: &str = "TONEGAUGE_ENDPOINT";
pub const ENV_API_KEY: &str = "TONEGAUGE_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "TONEGAUGE_TIMEOUT_SECS";

/// Settings layered over the config file (environment first, then CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub provider: Option<ProviderKind>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let provider = match get(ENV_PROVIDER) {
            Some(v) => Some(
                ProviderKind::parse(&v)
                    .ok_or_else(|| anyhow!("{ENV_PROVIDER}: unknown provider {v:?}"))?,
            ),
            None => None,
        };
        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(v) => Some(
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{ENV_TIMEOUT_SECS}: not a number: {v:?}"))?,
            ),
            None => None,
        };

        Ok(Self {
            provider,
            endpoint: get(ENV_ENDPOINT),
            api_key: get(ENV_API_KEY),
            timeout_secs,
        })
    }

    /// `other` wins wherever it sets something.
    pub fn merged_with(self, other: ConfigOverrides) -> Self {
        Self {
            provider: other.provider.or(self.provider),
            endpoint: other.endpoint.or(self.endpoint),
            api_key: other.api_key.or(self.api_key),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Endpoint, key and timeout only mean something for the remote provider;
    /// with the random one selected they are ignored.
    pub fn apply(&self, mut cfg: AppConfig) -> AppConfig {
        if let Some(kind) = self.provider {
            if cfg.provider.kind() != kind {
                cfg.provider = match kind {
                    ProviderKind::Remote => ProviderConfig::Remote(RemoteProviderConfig::default()),
                    ProviderKind::Random => ProviderConfig::Random(RandomProviderConfig::default()),
                };
            }
        }

        match &mut cfg.provider {
            ProviderConfig::Remote(remote) => {
                if let Some(endpoint) = &self.endpoint {
                    remote.endpoint = endpoint.trim().to_string();
                }
                if let Some(key) = &self.api_key {
                    remote.api_key = Some(key.clone());
                }
                if let Some(secs) = self.timeout_secs {
                    remote.timeout_secs = secs;
                }
            }
            ProviderConfig::Random(_) => {
                if self.endpoint.is_some() || self.api_key.is_some() || self.timeout_secs.is_some()
                {
                    log::warn!("remote provider settings ignored: random provider selected");
                }
            }
        }
        cfg
    }
}
