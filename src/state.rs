use crate::config::Config;
use crate::services::gemini::{GeminiClient, GenerativeBackend};
use crate::services::template::render_system_prompt;
use crate::services::{
    catalog, CredentialSource, EnvCredentials, MetricsService, ModelInvoker, TranscriptAssembler,
};
use anyhow::Result;
use std::sync::Arc;

/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assembler: Arc<TranscriptAssembler>,
    pub invoker: Arc<ModelInvoker>,
    pub credentials: Arc<dyn CredentialSource>,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    /// Production wiring: environment credentials and the Gemini HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        tracing::info!("[STATE] Initializing AppState...");
        tracing::info!("[STATE]   Provider: {}", config.gemini.base_url);
        tracing::info!("[STATE]   Standard model: {}", config.gemini.standard_model);
        tracing::info!("[STATE]   Thinking model: {}", config.gemini.thinking_model);

        let client = GeminiClient::new(&config.gemini)?;
        Self::with_backend(config, Arc::new(client), Arc::new(EnvCredentials::new()))
    }

    /// Wires the state around an injected backend and credential source.
    pub fn with_backend(
        config: Config,
        backend: Arc<dyn GenerativeBackend>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self> {
        let system_prompt = render_system_prompt(catalog::all())?;
        tracing::debug!("[STATE] System prompt rendered ({} bytes)", system_prompt.len());

        if credentials.is_configured() {
            tracing::info!("[STATE] ✅ Gemini API key found");
        } else {
            tracing::warn!("[STATE] ⚠️ No Gemini API key set, chat will answer with a configuration notice");
        }

        let metrics = Arc::new(MetricsService::new());
        let invoker = ModelInvoker::new(
            backend,
            credentials.clone(),
            config.gemini.clone(),
            metrics.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            assembler: Arc::new(TranscriptAssembler::new(system_prompt)),
            invoker: Arc::new(invoker),
            credentials,
            metrics,
        })
    }
}
