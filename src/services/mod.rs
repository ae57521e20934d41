pub mod catalog;
pub mod credentials;
pub mod gemini;
pub mod invoker;
mod metrics;
pub mod template;
pub mod transcript;

pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use invoker::{ModelConfiguration, ModelInvoker};
pub use metrics::{ChatOutcome, MetricsService, MetricsStats};
pub use transcript::{ConversationRequest, ProviderPayload, TranscriptAssembler};
