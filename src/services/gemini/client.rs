//! HTTP client for the Gemini `generateContent` endpoint

use super::error::ProviderError;
use super::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// The single suspension point of a chat call.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError>;
}

/// Built once at startup and shared; `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.endpoint(model);
        tracing::debug!("[GEMINI] POST {} ({} contents)", url, request.contents.len());

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::classify(None, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            tracing::warn!("[GEMINI] {} returned {}: {}", model, status, message);
            return Err(ProviderError::classify(Some(status), message));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ProviderError::Other(format!("malformed response: {e}")))
    }
}
