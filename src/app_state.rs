use std::sync::Arc;

use crate::{
    config::Config,
    providers::{
        extraction::{RemoteTextExtractor, TextExtractor},
        generation::{GroqTextGenerator, TextGenerator},
        retrieval::{EmbeddingProvider, GoogleEmbeddingProvider},
    },
    services::{assistant_service::AssistantService, quiz_service::QuizService},
    sessions::SessionStore,
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub assistant_service: Arc<AssistantService>,
    pub quiz_service: Arc<QuizService>,
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(GroqTextGenerator::new(&config));
        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(GoogleEmbeddingProvider::new(&config));
        let extractor: Arc<dyn TextExtractor> = Arc::new(RemoteTextExtractor::new(&config));

        Self::with_providers(config, generator, embedder, extractor)
    }

    /// Wires the services around explicit providers; tests swap in mocks here.
    pub fn with_providers(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        embedder: Arc<dyn EmbeddingProvider>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let assistant_service = Arc::new(AssistantService::new(generator.clone(), embedder));
        let quiz_service = Arc::new(QuizService::new(generator));

        Self {
            sessions: Arc::new(SessionStore::new()),
            assistant_service,
            quiz_service,
            extractor,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.groq_model, "llama3-8b-8192");
    }
}
