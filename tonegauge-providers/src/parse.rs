use serde::Deserialize;
use tonegauge_core::{AnalysisResult, ProviderError};

const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    detail: String,
    direct_percent: f64,
    indirect_percent: f64,
}

pub fn parse_analysis_response(body: &[u8]) -> Result<AnalysisResult, ProviderError> {
    let resp: AnalyzeResponse = serde_json::from_slice(body).map_err(ProviderError::malformed)?;
    if !resp.direct_percent.is_finite() || !resp.indirect_percent.is_finite() {
        return Err(ProviderError::MalformedPayload(
            "percentages must be finite numbers".into(),
        ));
    }
    Ok(AnalysisResult::new(
        resp.detail,
        resp.direct_percent,
        resp.indirect_percent,
    ))
}

/// Non-2xx is a failure no matter what the body says.
pub fn check_status(status: u16, body: &[u8]) -> Result<(), ProviderError> {
    if (200..=299).contains(&status) {
        return Ok(());
    }
    let text: String = String::from_utf8_lossy(body)
        .chars()
        .take(MAX_ERROR_BODY_CHARS)
        .collect();
    Err(ProviderError::Status { status, body: text })
}
