//! Chat handler: validates the message at the boundary, then hands it to the rule-based
//! resolver together with the live sensor store so "dados atuais" can quote real readings.

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::AppState;
use axum::extract::State;
use axum::Json;

pub(crate) const MESSAGE_REQUIRED: &str = "message is required";

#[derive(Debug, serde::Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
    /// Client thread id. Assigned by the gateway when missing.
    #[serde(default, rename = "conversationId")]
    conversation_id: Option<String>,
}

/// POST /api/chat
pub(crate) async fn chat(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ChatRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let message = req
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MESSAGE_REQUIRED.to_string()))?;
    let conversation_id = req
        .conversation_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let resolution = state.resolver.resolve(message, state.sensors.as_ref());
    tracing::info!(
        target: "lubbi::chat",
        conversation_id = %conversation_id,
        chars = message.chars().count(),
        rule = resolution.rule,
        "Chat answered"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "response": resolution.text,
        "conversationId": conversation_id,
    })))
}
