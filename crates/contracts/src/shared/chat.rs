use serde::{Deserialize, Serialize};

/// Путь эндпоинта чата
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Assistant text shown when the server answered without a `response` field.
pub const FALLBACK_UNPROCESSED: &str = "Sorry, I couldn't process that.";

/// Assistant text shown when the request failed or the body was not JSON.
pub const FALLBACK_TRANSPORT: &str = "An error occurred. Please try again.";

/// Server error text for a missing or blank message
pub const ERROR_NO_MESSAGE: &str = "No message provided.";

/// Server error text for a failed completion
pub const ERROR_LLM_FAILED: &str = "Failed to process the request with the language model.";

/// DTO запроса: `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Тело ответа `/api/chat`.
///
/// Both fields are optional on the wire: a success carries `response`,
/// a failure carries `error`. The client only looks at `response`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatReply {
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response: None,
            error: Some(text.into()),
        }
    }

    /// Text to show as the assistant message for this reply.
    /// An empty `response` counts as missing.
    pub fn assistant_text(&self) -> &str {
        match self.response.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => FALLBACK_UNPROCESSED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let json = serde_json::to_string(&ChatRequest::new("hi")).unwrap();
        assert_eq!(json, r#"{"message":"hi"}"#);
    }

    #[test]
    fn test_request_without_message_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message, "");
    }

    #[test]
    fn test_reply_serializes_only_present_field() {
        let ok = serde_json::to_string(&ChatReply::response("hello")).unwrap();
        assert_eq!(ok, r#"{"response":"hello"}"#);

        let err = serde_json::to_string(&ChatReply::error(ERROR_NO_MESSAGE)).unwrap();
        assert_eq!(err, r#"{"error":"No message provided."}"#);
    }

    #[test]
    fn test_assistant_text() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"hello"}"#).unwrap();
        assert_eq!(reply.assistant_text(), "hello");

        let reply: ChatReply = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(reply.assistant_text(), FALLBACK_UNPROCESSED);

        let reply: ChatReply = serde_json::from_str(r#"{"unrelated":1}"#).unwrap();
        assert_eq!(reply.assistant_text(), FALLBACK_UNPROCESSED);

        let reply: ChatReply = serde_json::from_str(r#"{"response":""}"#).unwrap();
        assert_eq!(reply.assistant_text(), FALLBACK_UNPROCESSED);
    }
}
