//! Translation engines.
//!
//! The engine is an external collaborator: it receives one sentence and the
//! generation settings, and returns the translated sentence. Truncation,
//! beam search and n-gram blocking all happen on the engine side.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::EngineError;
use crate::models::GenerationParams;

/// A sentence-level translation backend.
#[async_trait::async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Translate a single sentence.
    async fn translate(&self, sentence: &str, params: &GenerationParams) -> Result<String, EngineError>;
}

/// Engine backed by a Hugging Face style inference endpoint.
#[derive(Clone)]
pub struct HttpTranslationEngine {
    client: Client,
    url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceParameters<'a> {
    truncation: bool,
    #[serde(flatten)]
    generation: &'a GenerationParams,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct Generated {
    #[serde(alias = "generated_text")]
    translation_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Many(Vec<Generated>),
    One(Generated),
}

impl HttpTranslationEngine {
    /// Create an engine for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.translation_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.translation_api_url.clone(),
            token: config.translation_api_token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl TranslationEngine for HttpTranslationEngine {
    async fn translate(&self, sentence: &str, params: &GenerationParams) -> Result<String, EngineError> {
        let body = InferenceRequest {
            inputs: sentence,
            parameters: InferenceParameters { truncation: true, generation: params },
            options: InferenceOptions { wait_for_model: true },
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(EngineError::Status { status: status.as_u16(), message: text });
        }

        match serde_json::from_str::<InferenceResponse>(&text)? {
            InferenceResponse::One(generated) => Ok(generated.translation_text),
            InferenceResponse::Many(generated) => generated
                .into_iter()
                .next()
                .map(|g| g.translation_text)
                .ok_or(EngineError::EmptyOutput),
        }
    }
}

impl std::fmt::Debug for HttpTranslationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslationEngine")
            .field("url", &self.url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

/// Wraps an engine so that at most one inference runs at a time.
#[derive(Debug)]
pub struct SerializedEngine<E> {
    inner: E,
    lock: Mutex<()>,
}

impl<E> SerializedEngine<E> {
    #[must_use]
    pub fn new(inner: E) -> Self {
        Self { inner, lock: Mutex::new(()) }
    }
}

#[async_trait::async_trait]
impl<E: TranslationEngine> TranslationEngine for SerializedEngine<E> {
    async fn translate(&self, sentence: &str, params: &GenerationParams) -> Result<String, EngineError> {
        let _guard = self.lock.lock().await;
        self.inner.translate(sentence, params).await
    }
}
