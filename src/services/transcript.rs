//! Builds provider requests from a caller-owned transcript

use crate::services::gemini::{Content, Part};
use crate::types::{ChatRequest, ChatTurn, Role};
use std::sync::Arc;

/// Every attached image is sent with this type.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// One chat invocation. Built per call, never stored.
#[derive(Debug, Clone)]
pub struct ConversationRequest {
    pub prior_turns: Vec<ChatTurn>,
    pub new_text: String,
    pub new_image: Option<String>,
    pub thinking_mode: bool,
}

impl From<ChatRequest> for ConversationRequest {
    fn from(req: ChatRequest) -> Self {
        Self {
            prior_turns: req.history,
            new_text: req.message,
            new_image: req.image,
            thinking_mode: req.use_thinking_mode,
        }
    }
}

/// Ordered contents plus the system instruction, ready for dispatch.
#[derive(Debug, Clone)]
pub struct ProviderPayload {
    pub system_instruction: Arc<str>,
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone)]
pub struct TranscriptAssembler {
    system_instruction: Arc<str>,
}

impl TranscriptAssembler {
    pub fn new(system_instruction: impl Into<Arc<str>>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// History is reduced to text; only the new turn may carry an image, and
    /// an empty image string counts as no image.
    pub fn assemble(
        &self,
        prior_turns: &[ChatTurn],
        new_text: &str,
        new_image: Option<&str>,
    ) -> ProviderPayload {
        let mut contents: Vec<Content> = prior_turns
            .iter()
            .filter(|turn| !turn.is_welcome())
            .map(|turn| Content::new(turn.role.as_str(), vec![Part::text(turn.text.as_str())]))
            .collect();

        let mut current = Vec::with_capacity(2);
        if let Some(image) = new_image.filter(|i| !i.is_empty()) {
            current.push(Part::inline(IMAGE_MIME_TYPE, image_data(image)));
        }
        current.push(Part::text(new_text));
        contents.push(Content::new(Role::User.as_str(), current));

        ProviderPayload {
            system_instruction: Arc::clone(&self.system_instruction),
            contents,
        }
    }

    pub fn assemble_request(&self, request: &ConversationRequest) -> ProviderPayload {
        self.assemble(
            &request.prior_turns,
            &request.new_text,
            request.new_image.as_deref(),
        )
    }
}

/// Strips a data-URI header: the text after the first comma, or the whole
/// input when there is no comma or nothing follows it.
pub fn image_data(data_uri: &str) -> &str {
    match data_uri.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => payload,
        _ => data_uri,
    }
}
