//! HTTP translation engine tests against a mock inference endpoint.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_lens::config::Config;
use arxiv_lens::error::{EngineError, TranslationError};
use arxiv_lens::models::GenerationParams;
use arxiv_lens::translate::{HttpTranslationEngine, SerializedEngine, TranslationEngine, Translator};

const MODEL_PATH: &str = "/models/fugumt-en-ja";

fn engine_for(server: &MockServer) -> HttpTranslationEngine {
    HttpTranslationEngine::new(&Config::for_testing(&server.uri())).unwrap()
}

fn translation(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!([{ "translation_text": text }]))
}

#[tokio::test]
async fn test_sends_sentence_and_generation_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_json(json!({
            "inputs": "The model converges.",
            "parameters": {
                "truncation": true,
                "num_beams": 4,
                "no_repeat_ngram_size": 2,
                "early_stopping": true
            },
            "options": {"wait_for_model": true}
        })))
        .respond_with(translation("モデルは収束する。"))
        .expect(1)
        .mount(&server)
        .await;

    let out = engine_for(&server)
        .translate("The model converges.", &GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(out, "モデルは収束する。");
}

#[tokio::test]
async fn test_custom_generation_params_pass_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "parameters": {"num_beams": 8, "no_repeat_ngram_size": 3, "early_stopping": false}
        })))
        .respond_with(translation("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let params = GenerationParams {
        max_input_length: 256,
        num_beams: 8,
        no_repeat_ngram_size: 3,
        early_stopping: false,
    };
    assert_eq!(engine_for(&server).translate("x", &params).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_bearer_token_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer hf_secret"))
        .respond_with(translation("認証済み"))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config { translation_api_token: Some("hf_secret".to_string()), ..Config::for_testing(&server.uri()) };
    let engine = HttpTranslationEngine::new(&config).unwrap();

    assert_eq!(engine.translate("Hi.", &GenerationParams::default()).await.unwrap(), "認証済み");
}

#[tokio::test]
async fn test_error_status_surfaces_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is currently loading"))
        .mount(&server)
        .await;

    let err = engine_for(&server).translate("Hi.", &GenerationParams::default()).await.unwrap_err();

    assert!(matches!(err, EngineError::Status { status: 503, ref message } if message.contains("loading")));
}

#[tokio::test]
async fn test_empty_array_is_empty_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = engine_for(&server).translate("Hi.", &GenerationParams::default()).await.unwrap_err();
    assert!(matches!(err, EngineError::EmptyOutput));
}

#[tokio::test]
async fn test_unexpected_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "weird"})))
        .mount(&server)
        .await;

    let err = engine_for(&server).translate("Hi.", &GenerationParams::default()).await.unwrap_err();
    assert!(matches!(err, EngineError::Parse(_)));
}

#[tokio::test]
async fn test_translator_over_http_engine() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({"inputs": "First sentence."})))
        .respond_with(translation("最初の文。"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({"inputs": "Second one?"})))
        .respond_with(translation("二つ目?"))
        .expect(1)
        .mount(&server)
        .await;

    let engine: Arc<dyn TranslationEngine> = Arc::new(SerializedEngine::new(engine_for(&server)));
    let translator = Translator::new(engine, GenerationParams::default());

    let result = translator.translate("First sentence. Second one?").await.unwrap();
    assert_eq!(result.translation, "最初の文。 二つ目?");
}

#[tokio::test]
async fn test_translator_stops_at_first_engine_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("CUDA out of memory"))
        .expect(1)
        .mount(&server)
        .await;

    let translator = Translator::new(Arc::new(engine_for(&server)), GenerationParams::default());
    let err = translator.translate("One. Two. Three.").await.unwrap_err();

    assert!(matches!(err, TranslationError::Engine(EngineError::Status { status: 500, .. })));
}
