//! Configuration for the arXiv Lens server.

use std::time::Duration;

use crate::models::GenerationParams;

/// External API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv query endpoint.
    pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

    /// Inference endpoint serving the English-to-Japanese model.
    pub const TRANSLATION_API_URL: &str =
        "https://api-inference.huggingface.co/models/staka/fugumt-en-ja";

    /// User agent sent to arXiv.
    pub const USER_AGENT: &str = concat!("arxiv-lens/", env!("CARGO_PKG_VERSION"));

    /// Request timeout for arXiv queries.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Request timeout for a single sentence translation (cold models are slow).
    pub const TRANSLATION_TIMEOUT: Duration = Duration::from_secs(120);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Entries requested per arXiv page.
    pub const PAGE_SIZE: usize = 100;

    /// Delay between consecutive page requests (arXiv asks for 3 seconds).
    pub const PAGE_DELAY: Duration = Duration::from_secs(3);
}

/// Generation parameters passed through to the translation engine.
pub mod generation {
    /// Inputs longer than this many tokens are truncated by the engine.
    pub const MAX_INPUT_LENGTH: u32 = 512;

    /// Beam width.
    pub const NUM_BEAMS: u32 = 4;

    /// No n-gram of this size may repeat in the output.
    pub const NO_REPEAT_NGRAM_SIZE: u32 = 2;

    /// Stop once every beam has finished.
    pub const EARLY_STOPPING: bool = true;
}

/// Search defaults.
pub mod search {
    /// Papers returned when `max_results` is not given.
    pub const DEFAULT_MAX_RESULTS: usize = 5;

    /// Upper bound on keyword suggestions per response.
    pub const MAX_SUGGESTIONS: usize = 10;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query endpoint (overridable for mock servers).
    pub arxiv_api_url: String,

    /// Translation inference endpoint.
    pub translation_api_url: String,

    /// Bearer token for the inference endpoint (optional).
    pub translation_api_token: Option<String>,

    /// Request timeout for arXiv.
    pub request_timeout: Duration,

    /// Request timeout for translation calls.
    pub translation_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Entries requested per arXiv page.
    pub page_size: usize,

    /// Delay between page requests.
    pub page_delay: Duration,

    /// Generation parameters for every sentence.
    pub generation: GenerationParams,

    /// Serialize engine invocations behind a mutex.
    pub serialize_inference: bool,
}

impl Config {
    /// Create a configuration pointing at the public endpoints.
    #[must_use]
    pub fn new(translation_api_token: Option<String>) -> Self {
        Self {
            arxiv_api_url: api::ARXIV_API_URL.to_string(),
            translation_api_url: api::TRANSLATION_API_URL.to_string(),
            translation_api_token,
            request_timeout: api::REQUEST_TIMEOUT,
            translation_timeout: api::TRANSLATION_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_size: api::PAGE_SIZE,
            page_delay: api::PAGE_DELAY,
            generation: GenerationParams::default(),
            serialize_inference: true,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            arxiv_api_url: format!("{}/api/query", base_url),
            translation_api_url: format!("{}/models/fugumt-en-ja", base_url),
            translation_api_token: None,
            request_timeout: Duration::from_secs(5),
            translation_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_size: api::PAGE_SIZE,
            page_delay: Duration::from_millis(0), // No delay in tests
            generation: GenerationParams::default(),
            serialize_inference: true,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ARXIV_API_URL`, `TRANSLATION_API_URL` and `TRANSLATION_API_TOKEN`
    /// (falling back to `HF_TOKEN`).
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let token = std::env::var("TRANSLATION_API_TOKEN")
            .or_else(|_| std::env::var("HF_TOKEN"))
            .ok()
            .filter(|t| !t.is_empty());

        let mut config = Self::new(token);

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.arxiv_api_url = url;
        }
        if let Ok(url) = std::env::var("TRANSLATION_API_URL") {
            config.translation_api_url = url;
        }
        if let Ok(size) = std::env::var("ARXIV_PAGE_SIZE") {
            config.page_size = size.parse()?;
            anyhow::ensure!(config.page_size > 0, "ARXIV_PAGE_SIZE must be positive");
        }

        Ok(config)
    }

    /// Check if a translation token is configured.
    #[must_use]
    pub const fn has_translation_token(&self) -> bool {
        self.translation_api_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_translation_token());
        assert_eq!(config.arxiv_api_url, api::ARXIV_API_URL);
        assert!(config.serialize_inference);
    }

    #[test]
    fn test_config_with_token() {
        let config = Config::new(Some("hf_test".to_string()));
        assert!(config.has_translation_token());
    }

    #[test]
    fn test_for_testing_points_at_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.arxiv_api_url, "http://127.0.0.1:9999/api/query");
        assert!(config.translation_api_url.starts_with("http://127.0.0.1:9999/"));
        assert_eq!(config.page_delay, Duration::ZERO);
    }

    #[test]
    fn test_generation_defaults() {
        let config = Config::default();
        assert_eq!(config.generation.max_input_length, 512);
        assert_eq!(config.generation.num_beams, 4);
        assert_eq!(config.generation.no_repeat_ngram_size, 2);
        assert!(config.generation.early_stopping);
    }
}
