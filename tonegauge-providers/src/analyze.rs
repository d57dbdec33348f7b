use crate::request::HttpRequest;
use anyhow::Context;
use serde_json::json;
use url::Url;

#[derive(Clone, PartialEq, Eq)]
pub struct AnalyzeEndpointConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for AnalyzeEndpointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeEndpointConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// `POST {endpoint}` with body `{"text": ...}`.
pub fn build_analyze_request(cfg: &AnalyzeEndpointConfig, text: &str) -> HttpRequest {
    let req = HttpRequest::post_json(cfg.endpoint.trim(), &json!({ "text": text }));
    match cfg.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => req.with_header("Authorization", format!("Bearer {key}")),
        _ => req,
    }
}

/// Rejects endpoints reqwest could not send to anyway, so config mistakes
/// show up at startup instead of on the first submit.
pub fn validate_endpoint(endpoint: &str) -> anyhow::Result<Url> {
    let url = Url::parse(endpoint.trim()).with_context(|| format!("invalid endpoint: {endpoint}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow::anyhow!("unsupported endpoint scheme: {other}")),
    }
}
