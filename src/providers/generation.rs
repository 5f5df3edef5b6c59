use async_openai::{config::OpenAIConfig, Client};
use async_openai::types::chat::{
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Low temperature keeps quiz output close to the requested format.
const GENERATION_TEMPERATURE: f32 = 0.3;

/// The text-generation capability. One prompt in, one string out; provider
/// errors are surfaced unchanged as `ProviderFailure`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Groq's chat-completions endpoint speaks the OpenAI wire format, so the
/// stock client works with a swapped api_base.
pub struct GroqTextGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqTextGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.groq_api_base.clone())
            .with_api_key(config.groq_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model: config.groq_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for GroqTextGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(GENERATION_TEMPERATURE)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::ProviderFailure("model returned an empty completion".into()))
    }
}
