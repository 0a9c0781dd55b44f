use axum::{extract::State, http::StatusCode, Json};
use contracts::shared::chat::{ChatReply, ChatRequest, ERROR_LLM_FAILED, ERROR_NO_MESSAGE};

use crate::shared::format::preview_text;
use crate::shared::llm::ChatMessage;
use crate::shared::state::AppState;

/// POST /api/chat
///
/// Один ход без истории: системный промпт + сообщение пользователя.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    let message = payload.message.trim();
    if message.is_empty() {
        tracing::warn!("chat: empty message rejected");
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatReply::error(ERROR_NO_MESSAGE)),
        );
    }

    tracing::info!("chat: user message '{}'", preview_text(message, 80));

    let messages = vec![
        ChatMessage::system(&*state.system_prompt),
        ChatMessage::user(message),
    ];

    match state.llm.chat_completion(messages).await {
        Ok(reply) => {
            tracing::info!(
                "chat: {} replied via {} (tokens: {:?}, finish: {:?})",
                reply.model,
                state.llm.provider_name(),
                reply.tokens_used,
                reply.finish_reason
            );
            (
                StatusCode::OK,
                Json(ChatReply::response(reply.content.trim())),
            )
        }
        Err(e) => {
            tracing::error!("chat: LLM request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply::error(ERROR_LLM_FAILED)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::{ChatRole, LlmError, LlmProvider, LlmResponse};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct StubProvider {
        reply: Option<&'static str>,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl StubProvider {
        fn answering(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            self.seen.lock().unwrap().extend(messages);
            match self.reply {
                Some(text) => Ok(LlmResponse {
                    content: text.to_string(),
                    tokens_used: Some(12),
                    model: "stub".to_string(),
                    finish_reason: Some("Stop".to_string()),
                }),
                None => Err(LlmError::ApiError("boom".to_string())),
            }
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    fn state_with(provider: Arc<StubProvider>) -> AppState {
        AppState::new(provider, "You are a helpful AI assistant.")
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let provider = StubProvider::answering("  **Hi** there\n");
        let (status, Json(body)) =
            chat(State(state_with(provider.clone())), Json(ChatRequest::new("hello"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.response.as_deref(), Some("**Hi** there"));
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn test_system_prompt_precedes_user_message() {
        let provider = StubProvider::answering("ok");
        let _ = chat(State(state_with(provider.clone())), Json(ChatRequest::new("  ping  "))).await;

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, ChatRole::System);
        assert_eq!(seen[0].content, "You are a helpful AI assistant.");
        assert_eq!(seen[1].role, ChatRole::User);
        assert_eq!(seen[1].content, "ping");
    }

    #[tokio::test]
    async fn test_blank_message_is_bad_request() {
        let provider = StubProvider::answering("never");
        let (status, Json(body)) =
            chat(State(state_with(provider.clone())), Json(ChatRequest::new("   "))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some(ERROR_NO_MESSAGE));
        assert!(provider.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_server_error() {
        let (status, Json(body)) =
            chat(State(state_with(StubProvider::failing())), Json(ChatRequest::new("hi"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some(ERROR_LLM_FAILED));
        assert!(body.response.is_none());
    }
}
