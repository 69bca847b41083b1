//! Translation pipeline.
//!
//! Sentence segmenter → one [`TranslationEngine`] call per sentence → joiner.

pub mod engine;
pub mod segment;

use std::sync::Arc;

pub use engine::{HttpTranslationEngine, SerializedEngine, TranslationEngine};

use crate::error::TranslationError;
use crate::models::{GenerationParams, TranslationResult};

/// Translates text sentence by sentence.
#[derive(Clone)]
pub struct Translator {
    engine: Arc<dyn TranslationEngine>,
    params: GenerationParams,
}

impl Translator {
    /// Create a translator over a process-wide engine handle.
    #[must_use]
    pub fn new(engine: Arc<dyn TranslationEngine>, params: GenerationParams) -> Self {
        Self { engine, params }
    }

    /// Translate `text`.
    ///
    /// Sentences are translated independently and in order, then joined with
    /// single spaces. Text without any sentence is rejected before the engine
    /// is called.
    pub async fn translate(&self, text: &str) -> Result<TranslationResult, TranslationError> {
        let sentences: Vec<&str> = segment::sentences(text).collect();
        if sentences.is_empty() {
            return Err(TranslationError::validation("text", "Text to translate is required"));
        }

        tracing::info!(sentences = sentences.len(), bytes = text.len(), "Translating text");

        let mut translated = Vec::with_capacity(sentences.len());
        for (index, sentence) in sentences.iter().enumerate() {
            let output = self.engine.translate(sentence, &self.params).await?;
            tracing::debug!(index, input_len = sentence.len(), output_len = output.len(), "Translated sentence");
            translated.push(output);
        }

        Ok(TranslationResult { translation: translated.join(" ") })
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator").field("params", &self.params).finish_non_exhaustive()
    }
}
