//! Model selection, dispatch and reply normalization

use crate::config::GeminiConfig;
use crate::services::credentials::CredentialSource;
use crate::services::gemini::{
    Content, GenerateContentRequest, GenerationConfig, GenerativeBackend, ProviderError,
    ThinkingConfig,
};
use crate::services::metrics::{ChatOutcome, MetricsService};
use crate::services::transcript::ProviderPayload;
use std::sync::Arc;
use std::time::Instant;

pub const NOT_CONFIGURED_REPLY: &str = "I'm sorry, but the AI service is not configured. Please add your Gemini API key to enable the AI assistant.";
pub const EMPTY_REPLY: &str = "I couldn't generate a response at this time.";
pub const AUTH_FAILURE_REPLY: &str =
    "There's an issue with the AI service configuration. Please ensure your API key is valid.";
pub const QUOTA_FAILURE_REPLY: &str =
    "The AI service is temporarily unavailable due to high demand. Please try again in a moment.";
pub const GENERIC_FAILURE_REPLY: &str =
    "I encountered an error while processing your request. Please try again.";

/// Exactly one variant per call. A thinking budget and an output cap are
/// mutually exclusive for the provider, so they live in separate variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelConfiguration {
    Standard { max_output_tokens: u32, temperature: f32 },
    Thinking { thinking_budget: u32 },
}

impl ModelConfiguration {
    pub fn select(thinking_mode: bool, config: &GeminiConfig) -> Self {
        if thinking_mode {
            Self::Thinking {
                thinking_budget: config.thinking_budget,
            }
        } else {
            Self::Standard {
                max_output_tokens: config.max_output_tokens,
                temperature: config.temperature,
            }
        }
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self, Self::Thinking { .. })
    }

    pub fn generation_config(&self) -> GenerationConfig {
        match *self {
            Self::Standard {
                max_output_tokens,
                temperature,
            } => GenerationConfig {
                max_output_tokens: Some(max_output_tokens),
                temperature: Some(temperature),
                thinking_config: None,
            },
            Self::Thinking { thinking_budget } => GenerationConfig {
                thinking_config: Some(ThinkingConfig { thinking_budget }),
                ..Default::default()
            },
        }
    }
}

/// The only place provider failures become user-facing text.
pub fn reply_for_failure(error: &ProviderError) -> &'static str {
    match error {
        ProviderError::Auth(_) => AUTH_FAILURE_REPLY,
        ProviderError::Quota(_) => QUOTA_FAILURE_REPLY,
        ProviderError::Other(_) => GENERIC_FAILURE_REPLY,
    }
}

pub struct ModelInvoker {
    backend: Arc<dyn GenerativeBackend>,
    credentials: Arc<dyn CredentialSource>,
    config: GeminiConfig,
    metrics: Arc<MetricsService>,
}

impl ModelInvoker {
    pub fn new(
        backend: Arc<dyn GenerativeBackend>,
        credentials: Arc<dyn CredentialSource>,
        config: GeminiConfig,
        metrics: Arc<MetricsService>,
    ) -> Self {
        Self {
            backend,
            credentials,
            config,
            metrics,
        }
    }

    pub fn model_for(&self, thinking_mode: bool) -> &str {
        if thinking_mode {
            &self.config.thinking_model
        } else {
            &self.config.standard_model
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    /// Always yields displayable text. At most one provider call, no retries.
    pub async fn invoke(&self, payload: &ProviderPayload, thinking_mode: bool) -> String {
        let started = Instant::now();
        let (outcome, text) = self.dispatch(payload, thinking_mode).await;
        self.metrics
            .record(outcome, started.elapsed().as_millis() as u64);
        text
    }

    async fn dispatch(&self, payload: &ProviderPayload, thinking_mode: bool) -> (ChatOutcome, String) {
        let Some(api_key) = self.credentials.api_key() else {
            tracing::warn!("[INVOKER] No API key configured, skipping provider call");
            return (ChatOutcome::Unconfigured, NOT_CONFIGURED_REPLY.to_string());
        };

        let configuration = ModelConfiguration::select(thinking_mode, &self.config);
        let model = self.model_for(thinking_mode);
        let request = GenerateContentRequest {
            contents: payload.contents.clone(),
            system_instruction: Content::instruction(&*payload.system_instruction),
            generation_config: configuration.generation_config(),
        };

        tracing::info!(
            "[INVOKER] Dispatching {} turn(s) to {} (thinking: {})",
            request.contents.len(),
            model,
            configuration.is_thinking()
        );

        match self.backend.generate(&api_key, model, &request).await {
            Ok(response) => {
                let text = response.text();
                if text.is_empty() {
                    tracing::warn!("[INVOKER] {} returned no text", model);
                    (ChatOutcome::EmptyReply, EMPTY_REPLY.to_string())
                } else {
                    (ChatOutcome::Replied, text)
                }
            }
            Err(e) => {
                tracing::error!("[INVOKER] Gemini API error ({}): {}", e.kind(), e);
                (ChatOutcome::ProviderFailure, reply_for_failure(&e).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::credentials::StaticCredentials;
    use crate::services::gemini::{GenerateContentResponse, Part};
    use crate::services::transcript::TranscriptAssembler;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Canned backend that records every call.
    struct MockBackend {
        calls: AtomicUsize,
        last_model: Mutex<Option<String>>,
        last_config: Mutex<Option<GenerationConfig>>,
        reply: Result<serde_json::Value, ProviderError>,
    }

    impl MockBackend {
        fn replying(reply: Result<serde_json::Value, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_model: Mutex::new(None),
                last_config: Mutex::new(None),
                reply,
            })
        }

        fn text(text: &str) -> Arc<Self> {
            Self::replying(Ok(serde_json::json!({
                "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
            })))
        }
    }

    #[async_trait]
    impl GenerativeBackend for MockBackend {
        async fn generate(
            &self,
            _api_key: &str,
            model: &str,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_model.lock().unwrap() = Some(model.to_string());
            *self.last_config.lock().unwrap() = Some(request.generation_config.clone());
            match &self.reply {
                Ok(value) => Ok(serde_json::from_value(value.clone()).unwrap()),
                Err(e) => Err(e.clone()),
            }
        }
    }

    fn invoker(backend: Arc<MockBackend>, key: Option<&str>) -> ModelInvoker {
        ModelInvoker::new(
            backend,
            Arc::new(StaticCredentials::new(key.map(String::from))),
            GeminiConfig::default(),
            Arc::new(MetricsService::new()),
        )
    }

    fn payload() -> ProviderPayload {
        TranscriptAssembler::new("system").assemble(&[], "Hello", None)
    }

    #[test]
    fn test_thinking_config_has_no_output_cap() {
        let config = GeminiConfig::default();
        let thinking = ModelConfiguration::select(true, &config).generation_config();
        assert_eq!(thinking.thinking_config, Some(ThinkingConfig { thinking_budget: 16384 }));
        assert!(thinking.max_output_tokens.is_none());
        assert!(thinking.temperature.is_none());

        let value = serde_json::to_value(&thinking).unwrap();
        assert_eq!(value, serde_json::json!({ "thinkingConfig": { "thinkingBudget": 16384 } }));

        let standard = ModelConfiguration::select(false, &config).generation_config();
        assert_eq!(standard.max_output_tokens, Some(1000));
        assert_eq!(standard.temperature, Some(0.7));
        assert!(standard.thinking_config.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_skips_dispatch() {
        let backend = MockBackend::text("should not be used");
        let invoker = invoker(backend.clone(), None);

        let reply = invoker.invoke(&payload(), false).await;
        assert_eq!(reply, NOT_CONFIGURED_REPLY);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        assert!(!invoker.is_configured());
    }

    #[tokio::test]
    async fn test_success_returns_provider_text() {
        let backend = MockBackend::text("Hi!");
        let invoker = invoker(backend.clone(), Some("key"));

        assert_eq!(invoker.invoke(&payload(), false).await, "Hi!");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            backend.last_model.lock().unwrap().as_deref(),
            Some("gemini-2.5-flash")
        );
    }

    #[tokio::test]
    async fn test_thinking_mode_uses_thinking_model() {
        let backend = MockBackend::text("Deep answer");
        let invoker = invoker(backend.clone(), Some("key"));

        invoker.invoke(&payload(), true).await;
        assert_eq!(backend.last_model.lock().unwrap().as_deref(), Some("gemini-2.5-pro"));
        let config = backend.last_config.lock().unwrap().clone().unwrap();
        assert!(config.thinking_config.is_some());
        assert!(config.max_output_tokens.is_none());
    }

    #[tokio::test]
    async fn test_empty_text_falls_back() {
        let backend = MockBackend::replying(Ok(serde_json::json!({ "candidates": [] })));
        let invoker = invoker(backend, Some("key"));
        assert_eq!(invoker.invoke(&payload(), false).await, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_failures_map_to_fixed_text() {
        let cases = [
            ("You exceeded your current quota", QUOTA_FAILURE_REPLY),
            ("API key not valid", AUTH_FAILURE_REPLY),
            ("socket hang up", GENERIC_FAILURE_REPLY),
        ];
        for (message, expected) in cases {
            let backend = MockBackend::replying(Err(ProviderError::classify(None, message)));
            let invoker = invoker(backend.clone(), Some("key"));
            let reply = invoker.invoke(&payload(), false).await;
            assert_eq!(reply, expected);
            assert!(!reply.contains(message));
            assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_outcomes_reach_metrics() {
        let metrics = Arc::new(MetricsService::new());
        let invoker = ModelInvoker::new(
            MockBackend::replying(Err(ProviderError::Other("down".into()))),
            Arc::new(StaticCredentials::new(Some("key".into()))),
            GeminiConfig::default(),
            metrics.clone(),
        );
        invoker.invoke(&payload(), false).await;

        let stats = metrics.get_stats();
        assert_eq!(stats.requests, 1);
        assert_eq!(stats.provider_failures, 1);
    }

    #[test]
    fn test_request_shape() {
        let payload = payload();
        let request = GenerateContentRequest {
            contents: payload.contents.clone(),
            system_instruction: Content::instruction(&*payload.system_instruction),
            generation_config: ModelConfiguration::select(false, &GeminiConfig::default())
                .generation_config(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(value["contents"][0]["parts"][0], serde_json::to_value(Part::text("Hello")).unwrap());
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1000);
    }
}
