use std::sync::Arc;
use tonegauge_core::{AnalysisResult, ProviderError, Severity};
use tonegauge_engine::controller::{HomeController, SubmitOutcome};
use tonegauge_engine::flow::{Notice, RequestState};
use tonegauge_engine::traits::AnalysisProvider;
use tonegauge_providers::analyze::{AnalyzeEndpointConfig, build_analyze_request};
use tonegauge_providers::parse::{check_status, parse_analysis_response};
use tonegauge_providers::runtime;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct HttpProvider {
    cfg: AnalyzeEndpointConfig,
}

#[async_trait::async_trait]
impl AnalysisProvider for HttpProvider {
    async fn submit(&self, text: &str) -> Result<AnalysisResult, ProviderError> {
        let req = build_analyze_request(&self.cfg, text);
        let resp = runtime::execute(&req).await?;
        check_status(resp.status, &resp.body)?;
        parse_analysis_response(&resp.body)
    }

    fn name(&self) -> &'static str {
        "http-test"
    }
}

fn controller_for(server: &MockServer) -> HomeController {
    HomeController::new(Arc::new(HttpProvider {
        cfg: AnalyzeEndpointConfig {
            endpoint: format!("{}/analyze", server.uri()),
            api_key: None,
        },
    }))
}

#[tokio::test]
async fn end_to_end_success_renders_bad_severity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(serde_json::json!({"text": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"detail":"x","direct_percent":85,"indirect_percent":10}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let ctl = controller_for(&server);
    let SubmitOutcome::Completed(snap) = ctl.submit_text("hello").await else {
        panic!("expected completion");
    };

    assert_eq!(
        snap.state,
        RequestState::Success {
            result: AnalysisResult::new("x", 85.0, 10.0)
        }
    );
    assert_eq!(snap.severity(), Some(Severity::Bad));
    assert!(!snap.detail_visible);
}

#[tokio::test]
async fn http_500_becomes_failed_with_generic_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal stack trace"))
        .mount(&server)
        .await;

    let ctl = controller_for(&server);
    let SubmitOutcome::Completed(snap) = ctl.submit_text("hello").await else {
        panic!("expected completion");
    };

    assert_eq!(snap.state.label(), "failed");
    assert_eq!(snap.notice, Some(Notice::ProviderFailure));
    assert!(!Notice::ProviderFailure.message().contains("stack trace"));
    assert!(ctl.submit_enabled().await);
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"detail":1}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let ctl = controller_for(&server);
    let SubmitOutcome::Completed(snap) = ctl.submit_text("hello").await else {
        panic!("expected completion");
    };
    assert_eq!(snap.notice, Some(Notice::ProviderFailure));
}

#[tokio::test]
async fn whitespace_input_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctl = controller_for(&server);
    assert!(matches!(
        ctl.submit_text("   ").await,
        SubmitOutcome::Rejected(_)
    ));
    assert_eq!(ctl.snapshot().await.state, RequestState::Idle);
}
