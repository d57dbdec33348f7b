use std::time::Duration;
use tonegauge_core::{AnalysisResult, ProviderError, RemoteProviderConfig};
use tonegauge_engine::traits::AnalysisProvider;
use tonegauge_providers::analyze::{AnalyzeEndpointConfig, build_analyze_request};
use tonegauge_providers::parse::{check_status, parse_analysis_response};
use tonegauge_providers::runtime::execute_with_timeout;

/// Calls the analysis service over HTTP.
#[derive(Clone)]
pub struct RemoteAnalysisProvider {
    endpoint: AnalyzeEndpointConfig,
    timeout: Duration,
}

impl std::fmt::Debug for RemoteAnalysisProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteAnalysisProvider")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RemoteAnalysisProvider {
    pub fn new(cfg: &RemoteProviderConfig) -> Self {
        Self {
            endpoint: AnalyzeEndpointConfig {
                endpoint: cfg.endpoint.clone(),
                api_key: cfg.api_key.clone(),
            },
            timeout: Duration::from_secs(cfg.timeout_secs.max(1)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint.endpoint
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for RemoteAnalysisProvider {
    async fn submit(&self, text: &str) -> Result<AnalysisResult, ProviderError> {
        let req = build_analyze_request(&self.endpoint, text);
        let resp = execute_with_timeout(&req, self.timeout).await?;
        check_status(resp.status, &resp.body)?;
        parse_analysis_response(&resp.body)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer, api_key: Option<&str>) -> RemoteAnalysisProvider {
        RemoteAnalysisProvider::new(&RemoteProviderConfig {
            endpoint: format!("{}/analyze", server.uri()),
            api_key: api_key.map(Into::into),
            timeout_secs: 5,
        })
    }

    #[tokio::test]
    async fn returns_parsed_result_and_sends_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .and(header("authorization", "Bearer k"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"detail":"calm","direct_percent":12.5,"indirect_percent":40}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let got = provider(&server, Some("k")).submit("hi").await.unwrap();
        assert_eq!(got, AnalysisResult::new("calm", 12.5, 40.0));
    }

    #[tokio::test]
    async fn non_2xx_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider(&server, None).submit("hi").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Status {
                status: 500,
                body: "boom".into()
            }
        );
    }

    #[test]
    fn debug_hides_api_key() {
        let p = RemoteAnalysisProvider::new(&RemoteProviderConfig {
            endpoint: "http://localhost:8080/analyze".into(),
            api_key: Some("sk-live".into()),
            timeout_secs: 30,
        });
        assert!(!format!("{p:?}").contains("sk-live"));
        assert_eq!(p.endpoint(), "http://localhost:8080/analyze");
    }
}
