use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub provider: ProviderConfig,

    #[serde(default)]
    pub home: HomeLayout,
}

/// Which analysis backend the home screen talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    Remote(RemoteProviderConfig),
    Random(RandomProviderConfig),
}

impl ProviderConfig {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderConfig::Remote(_) => ProviderKind::Remote,
            ProviderConfig::Random(_) => ProviderKind::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Remote,
    Random,
}

impl ProviderKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Some(ProviderKind::Remote),
            "random" | "mock" => Some(ProviderKind::Random),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProviderConfig {
    pub endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for RemoteProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for RemoteProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RandomProviderConfig {
    // Fixed seed makes the stand-in reproducible (tests, demos).
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub latency_ms: u64,
}

/// Knobs that differed between revisions of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomeLayout {
    pub ring_size: f64,
    pub ring_stroke: f64,
    pub style: LayoutStyle,
}

impl Default for HomeLayout {
    fn default() -> Self {
        Self {
            ring_size: 150.0,
            ring_stroke: 16.0,
            style: LayoutStyle::Card,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Result panel drawn as a translucent card around the gauges.
    Card,
    Flat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_config_is_tagged_by_kind() {
        let json = r#"{"provider":{"kind":"random","seed":7}}"#;
        let cfg: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            cfg.provider,
            ProviderConfig::Random(RandomProviderConfig {
                seed: Some(7),
                latency_ms: 0
            })
        );
        assert_eq!(cfg.home, HomeLayout::default());
    }

    #[test]
    fn remote_timeout_defaults_when_missing() {
        let json = r#"{"kind":"remote","endpoint":"http://h/analyze"}"#;
        let cfg: ProviderConfig = serde_json::from_str(json).unwrap();
        match cfg {
            ProviderConfig::Remote(r) => assert_eq!(r.timeout_secs, DEFAULT_TIMEOUT_SECS),
            _ => panic!("expected remote"),
        }
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = RemoteProviderConfig {
            api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        let s = format!("{cfg:?}");
        assert!(!s.contains("sk-secret"));
        assert!(s.contains("[REDACTED]"));
    }

    #[test]
    fn provider_kind_parses_aliases() {
        assert_eq!(ProviderKind::parse(" Remote "), Some(ProviderKind::Remote));
        assert_eq!(ProviderKind::parse("mock"), Some(ProviderKind::Random));
        assert_eq!(ProviderKind::parse("other"), None);
    }
}
