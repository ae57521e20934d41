//! Gemini provider: wire types, typed errors and the HTTP client

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeminiClient, GenerativeBackend};
pub use error::ProviderError;
pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
    ThinkingConfig,
};
