use std::sync::Arc;

use anyhow::bail;
use tonegauge_core::{AppConfig, HomeLayout, Navigator, Route};
use tonegauge_engine::controller::{HomeController, SubmitOutcome};
use tonegauge_runtime::config_store::ConfigStore;
use tonegauge_runtime::env::ConfigOverrides;
use tonegauge_runtime::factory::build_home_controller;

use crate::view::{HomeView, LoginView, Screen};

/// Front-end facing facade: owns navigation plus the home screen's controller.
#[derive(Clone)]
pub struct AppService {
    layout: HomeLayout,
    navigator: Arc<tokio::sync::Mutex<Navigator>>,
    home: HomeController,
}

impl AppService {
    pub fn new(cfg: &AppConfig) -> anyhow::Result<Self> {
        let home = build_home_controller(&cfg.provider)?;
        Ok(Self {
            layout: cfg.home,
            navigator: Arc::new(tokio::sync::Mutex::new(Navigator::new())),
            home,
        })
    }

    /// Config file (or defaults when missing) with `overrides` on top.
    pub fn from_store(store: &ConfigStore, overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        let cfg = overrides.apply(store.load_or_default()?);
        Self::new(&cfg)
    }

    pub fn provider_name(&self) -> &'static str {
        self.home.provider_name()
    }

    pub fn layout(&self) -> &HomeLayout {
        &self.layout
    }

    pub async fn current_route(&self) -> Route {
        self.navigator.lock().await.current()
    }

    /// Replaces the stack with Home; Back from there does not return to Login.
    pub async fn login(&self) -> Route {
        let route = self.navigator.lock().await.login();
        log::info!("logged in, provider={}", self.home.provider_name());
        route
    }

    /// Drops back to Login and discards whatever the home screen held,
    /// including any request still in flight.
    pub async fn logout(&self) -> Route {
        self.home.reset().await;
        self.navigator.lock().await.logout()
    }

    pub async fn back(&self) -> Route {
        self.navigator.lock().await.back()
    }

    async fn ensure_home(&self) -> anyhow::Result<()> {
        let route = self.current_route().await;
        if route != Route::Home {
            bail!("home screen is not active (current: {})", route.title());
        }
        Ok(())
    }

    pub async fn set_input(&self, text: impl Into<String>) -> anyhow::Result<()> {
        self.ensure_home().await?;
        self.home.set_input(text).await;
        Ok(())
    }

    pub async fn analyze(&self) -> anyhow::Result<SubmitOutcome> {
        self.ensure_home().await?;
        Ok(self.home.submit().await)
    }

    pub async fn analyze_text(&self, text: impl Into<String>) -> anyhow::Result<SubmitOutcome> {
        self.ensure_home().await?;
        Ok(self.home.submit_text(text).await)
    }

    pub async fn toggle_detail(&self) -> anyhow::Result<bool> {
        self.ensure_home().await?;
        Ok(self.home.toggle_detail().await)
    }

    pub async fn dismiss_notice(&self) -> anyhow::Result<()> {
        self.ensure_home().await?;
        self.home.dismiss_notice().await;
        Ok(())
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        self.ensure_home().await?;
        self.home.reset().await;
        Ok(())
    }

    pub async fn screen(&self) -> Screen {
        match self.current_route().await {
            Route::Login => Screen::Login(LoginView::default()),
            Route::Home => Screen::Home(self.home_view().await),
        }
    }

    pub async fn home_view(&self) -> HomeView {
        HomeView::build(&self.home.snapshot().await, &self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonegauge_core::{ProviderConfig, RandomProviderConfig};
    use tonegauge_runtime::config_store::CONFIG_FILE_NAME;
    use tonegauge_runtime::defaults::default_app_config;

    fn random_config() -> AppConfig {
        AppConfig {
            provider: ProviderConfig::Random(RandomProviderConfig {
                seed: Some(7),
                latency_ms: 0,
            }),
            home: HomeLayout::default(),
        }
    }

    #[tokio::test]
    async fn starts_on_login_and_blocks_home_actions() {
        let svc = AppService::new(&random_config()).unwrap();
        assert_eq!(svc.current_route().await, Route::Login);
        assert!(matches!(svc.screen().await, Screen::Login(_)));
        assert!(svc.analyze_text("hello").await.is_err());
    }

    #[tokio::test]
    async fn login_then_analyze_shows_gauges() {
        let svc = AppService::new(&random_config()).unwrap();
        assert_eq!(svc.login().await, Route::Home);
        // Login replaced the stack.
        assert_eq!(svc.back().await, Route::Home);

        let outcome = svc.analyze_text("hello").await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Completed(_)));

        let Screen::Home(view) = svc.screen().await else {
            panic!("expected home screen");
        };
        let result = view.result.unwrap();
        assert_eq!(result.gauges.len(), 2);
        assert!(result.detail.is_none());

        assert!(svc.toggle_detail().await.unwrap());
        let view = svc.home_view().await;
        assert!(view.result.unwrap().detail.is_some());
    }

    #[tokio::test]
    async fn blank_input_raises_notice() {
        let svc = AppService::new(&random_config()).unwrap();
        svc.login().await;
        let outcome = svc.analyze_text("   ").await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert!(svc.home_view().await.notice.is_some());
    }

    #[tokio::test]
    async fn logout_discards_home_state() {
        let svc = AppService::new(&random_config()).unwrap();
        svc.login().await;
        svc.analyze_text("hello").await.unwrap();

        assert_eq!(svc.logout().await, Route::Login);
        svc.login().await;
        let view = svc.home_view().await;
        assert!(view.result.is_none());
        assert!(view.input.is_empty());
    }

    #[tokio::test]
    async fn from_store_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join(CONFIG_FILE_NAME));
        store.save(&default_app_config()).unwrap();

        let overrides = ConfigOverrides {
            provider: Some(tonegauge_core::ProviderKind::Random),
            ..Default::default()
        };
        let svc = AppService::from_store(&store, &overrides).unwrap();
        assert_eq!(svc.provider_name(), "random");
    }

    #[test]
    fn screen_serializes_with_tag() {
        let json = serde_json::to_value(Screen::Login(LoginView::default())).unwrap();
        assert_eq!(json["screen"], "login");
        assert_eq!(json["button_label"], "Log in");
    }
}
