pub mod openai_provider;
pub mod types;

pub use openai_provider::OpenAiProvider;
pub use types::*;
