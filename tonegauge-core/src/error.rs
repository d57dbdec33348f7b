use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input text is empty")]
    EmptyInput,
}

/// Everything that can go wrong talking to an analysis provider.
///
/// The home screen never shows these details to the user; they only reach logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

impl ProviderError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
