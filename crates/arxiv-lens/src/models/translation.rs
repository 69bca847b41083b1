//! Translation request and engine parameter models.

use serde::{Deserialize, Serialize};

use crate::config::generation;

/// Body of a `/translate` request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of a successful `/translate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
}

/// Generation settings forwarded to the translation engine on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Token limit of the model's tokenizer. Not sent on the wire: the engine
    /// applies it when `truncation` is on, and an unknown key would reach
    /// `generate` as a model kwarg.
    #[serde(skip_serializing)]
    pub max_input_length: u32,

    /// Beam width.
    pub num_beams: u32,

    /// Size of n-grams that may not repeat.
    pub no_repeat_ngram_size: u32,

    /// Finish once all beams are complete.
    pub early_stopping: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_input_length: generation::MAX_INPUT_LENGTH,
            num_beams: generation::NUM_BEAMS,
            no_repeat_ngram_size: generation::NO_REPEAT_NGRAM_SIZE,
            early_stopping: generation::EARLY_STOPPING,
        }
    }
}
