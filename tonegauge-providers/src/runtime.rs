use crate::request::{Body, HttpRequest, Method};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tonegauge_core::ProviderError;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

pub async fn execute(req: &HttpRequest) -> Result<HttpResponse, ProviderError> {
    execute_with_timeout(req, DEFAULT_REQUEST_TIMEOUT).await
}

/// Sends one request. Exactly one attempt; callers decide what a failure means.
pub async fn execute_with_timeout(
    req: &HttpRequest,
    timeout: Duration,
) -> Result<HttpResponse, ProviderError> {
    // Without an explicit timeout a dead endpoint would leave the home screen
    // stuck in Loading.
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Network(format!("build http client: {e}")))?;

    let mut headers = HeaderMap::new();
    for (k, v) in &req.headers {
        let name = HeaderName::from_bytes(k.as_bytes())
            .map_err(|e| ProviderError::Network(format!("invalid header name {k}: {e}")))?;
        let value = HeaderValue::from_str(v)
            .map_err(|e| ProviderError::Network(format!("invalid header value for {k}: {e}")))?;
        headers.insert(name, value);
    }

    let builder = match req.method {
        Method::Post => client.post(&req.url),
    }
    .headers(headers);

    let Body::Json(s) = &req.body;
    let builder = builder.body(s.clone());

    log::debug!("http request: {req:?}");
    let resp = builder
        .send()
        .await
        .map_err(|e| ProviderError::Network(format!("http request failed: {e}")))?;
    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .map_err(|e| ProviderError::Network(format!("failed reading response body: {e}")))?
        .to_vec();

    Ok(HttpResponse { status, body })
}
