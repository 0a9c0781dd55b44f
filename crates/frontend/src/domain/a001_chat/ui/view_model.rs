//! Chat - View Model

use contracts::shared::chat::{ChatReply, FALLBACK_TRANSPORT};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Ключ для <For>, уникален в пределах сессии
    pub id: u64,
    pub role: ChatRole,
    /// Raw text. User messages render escaped; assistant messages go
    /// through markdown.
    pub content: String,
}

/// Visible message list. Nothing outlives the page.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Trim the input and, if anything is left, append it as a user message.
    ///
    /// Returns the text to send, or `None` when nothing must be sent.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        self.push(ChatRole::User, message.to_string());
        Some(message.to_string())
    }

    /// Append the assistant side of one exchange. Always appends exactly
    /// one message; failures become a fixed fallback text.
    pub fn receive(&mut self, outcome: Result<ChatReply, String>) -> &ChatMessage {
        let content = match &outcome {
            Ok(reply) => {
                if reply.response.is_none() {
                    log::warn!("chat reply without response: {:?}", reply.error);
                }
                reply.assistant_text().to_string()
            }
            Err(e) => {
                log::error!("Error: {}", e);
                FALLBACK_TRANSPORT.to_string()
            }
        };
        self.push(ChatRole::Assistant, content)
    }

    /// Сброс чата, без отмены
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push(&mut self, role: ChatRole, content: String) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content });
        &self.messages[self.messages.len() - 1]
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            transcript: RwSignal::new(Transcript::default()),
            input: RwSignal::new(String::new()),
        }
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::chat::FALLBACK_UNPROCESSED;

    #[test]
    fn test_blank_input_is_dropped() {
        let mut t = Transcript::default();
        let mut sent = Vec::new();
        for raw in ["", "   ", "\n\t "] {
            if let Some(msg) = t.submit(raw) {
                sent.push(msg);
            }
        }
        assert!(t.is_empty());
        assert!(sent.is_empty());
    }

    #[test]
    fn test_submit_trims_and_appends_user_message() {
        let mut t = Transcript::default();
        assert_eq!(t.submit("  hi there \n"), Some("hi there".to_string()));
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].role, ChatRole::User);
        assert_eq!(t.messages()[0].content, "hi there");
    }

    #[test]
    fn test_user_markup_is_kept_verbatim() {
        let mut t = Transcript::default();
        t.submit("<script>alert(1)</script>");
        assert_eq!(t.messages()[0].content, "<script>alert(1)</script>");
    }

    #[test]
    fn test_successful_reply() {
        let mut t = Transcript::default();
        t.submit("ping");
        let msg = t.receive(Ok(ChatReply::response("hello")));
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_one_fallback_per_failed_submission() {
        let mut t = Transcript::default();
        t.submit("one");
        t.submit("two");
        t.receive(Ok(ChatReply::error("boom")));
        t.receive(Err("TypeError: Failed to fetch".to_string()));

        let assistant: Vec<&str> = t
            .messages()
            .iter()
            .filter(|m| m.role == ChatRole::Assistant)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(assistant, vec![FALLBACK_UNPROCESSED, FALLBACK_TRANSPORT]);
    }

    #[test]
    fn test_ids_unique_after_clear() {
        let mut t = Transcript::default();
        t.submit("a");
        let first = t.messages()[0].id;
        t.clear();
        assert!(t.is_empty());
        t.submit("b");
        assert_ne!(t.messages()[0].id, first);
    }
}
