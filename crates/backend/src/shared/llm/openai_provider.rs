use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI провайдер
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// Создать с кастомным endpoint (для совместимых API)
    pub fn new_with_endpoint(
        api_endpoint: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: i32,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);
        let client = Client::with_config(config);

        Self {
            client,
            model,
            temperature: temperature as f32,
            max_tokens: max_tokens.max(1) as u32,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        let mut openai_messages = Vec::with_capacity(messages.len());

        for msg in messages {
            let openai_msg = match msg.role {
                ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
                ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
            };
            openai_messages.push(openai_msg);
        }

        Ok(openai_messages)
    }

    /// Проверяет, поддерживает ли модель temperature и max_completion_tokens.
    /// gpt-5 и o1/o3 принимают только дефолтные значения.
    fn supports_advanced_params(model_id: &str) -> bool {
        let is_restricted = model_id.starts_with("gpt-5")
            || model_id.starts_with("o1-")
            || model_id.starts_with("o3-");

        !is_restricted
    }
}

fn classify_error(e: OpenAIError) -> LlmError {
    let err_str = e.to_string();
    if err_str.contains("401") || err_str.contains("authentication") {
        LlmError::AuthError(err_str)
    } else if err_str.contains("429") || err_str.contains("rate limit") {
        LlmError::RateLimitExceeded
    } else {
        LlmError::ApiError(err_str)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let openai_messages = Self::convert_messages(messages)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .messages(openai_messages);

        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(classify_error)?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        let content = choice.message.content.clone().unwrap_or_default();
        let tokens_used = response.usage.map(|u| u.total_tokens as i32);
        let finish_reason = choice.finish_reason.as_ref().map(|r| format!("{:?}", r));

        Ok(LlmResponse {
            content,
            tokens_used,
            model: response.model.clone(),
            finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_models_skip_advanced_params() {
        assert!(OpenAiProvider::supports_advanced_params("gpt-3.5-turbo"));
        assert!(OpenAiProvider::supports_advanced_params("gpt-4o"));
        assert!(!OpenAiProvider::supports_advanced_params("gpt-5-mini"));
        assert!(!OpenAiProvider::supports_advanced_params("o1-preview"));
    }

    #[test]
    fn test_convert_messages_keeps_order() {
        let converted = OpenAiProvider::convert_messages(vec![
            ChatMessage::system("You are a helpful AI assistant."),
            ChatMessage::user("hi"),
        ])
        .unwrap();
        assert_eq!(converted.len(), 2);
        assert!(matches!(converted[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_non_positive_max_tokens_clamped() {
        let provider = OpenAiProvider::new_with_endpoint(
            "http://localhost:1".into(),
            String::new(),
            "gpt-3.5-turbo".into(),
            0.7,
            0,
        );
        assert_eq!(provider.max_tokens, 1);
        assert_eq!(provider.model(), "gpt-3.5-turbo");
    }
}
