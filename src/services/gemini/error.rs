use axum::http::StatusCode;

/// Failure at the provider boundary. The payload is operator-facing detail
/// and must not be shown to end users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider rejected credentials: {0}")]
    Auth(String),

    #[error("provider quota exhausted: {0}")]
    Quota(String),

    #[error("provider call failed: {0}")]
    Other(String),
}

impl ProviderError {
    /// Message markers win over the HTTP status; `"API key"` is checked before `"quota"`.
    pub fn classify(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("API key") {
            return Self::Auth(message);
        }
        if message.contains("quota") {
            return Self::Quota(message);
        }
        match status {
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => Self::Auth(message),
            Some(StatusCode::TOO_MANY_REQUESTS) => Self::Quota(message),
            _ => Self::Other(message),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Quota(_) => "quota",
            Self::Other(_) => "other",
        }
    }
}
