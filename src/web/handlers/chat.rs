//! Chat proxy endpoint

use crate::services::ConversationRequest;
use crate::state::AppState;
use crate::types::{AppError, ChatRequest, ChatResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use uuid::Uuid;

/// `POST /api/chat`. Provider trouble still answers 200 with displayable text.
pub async fn send_message(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!("[CHAT] Rejected body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    let issues = request.validate();
    if !issues.is_empty() {
        tracing::warn!("[CHAT] Rejected request with {} issue(s)", issues.len());
        return Err(AppError::Validation(issues));
    }

    let request_id = Uuid::now_v7();
    tracing::info!(
        "[CHAT] {} received: {} chars, {} prior turn(s), image: {}, thinking: {}",
        request_id,
        request.message.len(),
        request.history.len(),
        request.image.is_some(),
        request.use_thinking_mode
    );

    let conversation = ConversationRequest::from(request);
    let payload = state.assembler.assemble_request(&conversation);
    let text = state
        .invoker
        .invoke(&payload, conversation.thinking_mode)
        .await;

    tracing::debug!("[CHAT] {} replied with {} chars", request_id, text.len());
    Ok(Json(ChatResponse { text }))
}
