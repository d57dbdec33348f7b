use anyhow::Context;
use std::path::{Path, PathBuf};
use tonegauge_core::AppConfig;

use crate::defaults::default_app_config;

pub const CONFIG_FILE_NAME: &str = "tonegauge.json";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> anyhow::Result<AppConfig> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read config: {}", self.path.display()))?;
        let cfg: AppConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("decode config JSON: {}", self.path.display()))?;
        Ok(cfg)
    }

    /// Missing file means defaults; a file that exists but doesn't parse is
    /// still an error.
    pub fn load_or_default(&self) -> anyhow::Result<AppConfig> {
        if !self.exists() {
            log::info!("no config at {}, using defaults", self.path.display());
            return Ok(default_app_config());
        }
        self.load()
    }

    pub fn save(&self, cfg: &AppConfig) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(cfg).context("encode config JSON")?;
        crate::fs::write_atomically(&self.path, &json)
            .with_context(|| format!("save config: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonegauge_core::{HomeLayout, LayoutStyle, ProviderConfig, RemoteProviderConfig};

    #[test]
    fn round_trips_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join(CONFIG_FILE_NAME));

        let cfg = AppConfig {
            provider: ProviderConfig::Remote(RemoteProviderConfig {
                endpoint: "https://example.com/analyze".into(),
                api_key: None,
                timeout_secs: 12,
            }),
            home: HomeLayout {
                ring_size: 140.0,
                ring_stroke: 16.0,
                style: LayoutStyle::Flat,
            },
        };

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("absent.json"));
        assert_eq!(store.load_or_default().unwrap(), default_app_config());
        assert!(store.load().is_err());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();
        assert!(ConfigStore::at_path(path).load_or_default().is_err());
    }
}
