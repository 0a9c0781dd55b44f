use std::sync::Arc;

use super::llm::LlmProvider;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmProvider>,
    pub system_prompt: Arc<str>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmProvider>, system_prompt: &str) -> Self {
        Self {
            llm,
            system_prompt: Arc::from(system_prompt),
        }
    }
}
