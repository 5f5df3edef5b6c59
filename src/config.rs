use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub groq_api_key: SecretString,
    pub groq_api_base: String,
    pub groq_model: String,
    pub google_api_key: SecretString,
    pub embedding_model: String,
    pub extractor_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: SecretString::from(
                env::var("GROQ_API_KEY").unwrap_or_else(|_| "dev_groq_key".to_string()),
            ),
            groq_api_base: env::var("GROQ_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| "llama3-8b-8192".to_string()),
            google_api_key: SecretString::from(
                env::var("GOOGLE_API_KEY").unwrap_or_else(|_| "dev_google_key".to_string()),
            ),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "models/embedding-001".to_string()),
            extractor_url: env::var("EXTRACTOR_URL")
                .unwrap_or_else(|_| "http://localhost:9998".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.groq_api_key.expose_secret() == "dev_groq_key" {
            panic!("FATAL: GROQ_API_KEY is using default value! Set GROQ_API_KEY environment variable.");
        }

        if self.google_api_key.expose_secret() == "dev_google_key" {
            panic!("FATAL: GOOGLE_API_KEY is using default value! Set GOOGLE_API_KEY environment variable.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            groq_api_key: SecretString::from("test_groq_key".to_string()),
            groq_api_base: "https://api.groq.com/openai/v1".to_string(),
            groq_model: "llama3-8b-8192".to_string(),
            google_api_key: SecretString::from("test_google_key".to_string()),
            embedding_model: "models/embedding-001".to_string(),
            extractor_url: "http://localhost:9998".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.groq_api_base.is_empty());
        assert!(!config.groq_model.is_empty());
        assert!(config.web_server_port > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.groq_model, "llama3-8b-8192");
        assert_eq!(config.embedding_model, "models/embedding-001");
        assert_eq!(config.web_server_host, "127.0.0.1");
    }
}
