//! HTTP routes.
//!
//! - `GET /` static search page
//! - `GET /health` liveness check
//! - `GET /search` paper search with keyword suggestions
//! - `POST /translate` English → Japanese translation

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::error::ApiError;
use crate::models::{SearchParams, SearchResponse, TranslationRequest, TranslationResult};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/search", get(search))
        .route("/translate", post(translate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "arxiv-lens",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /search?query=&max_results=&start_date=&end_date=&sort_by=`
async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let request = params.into_request()?;
    let response = state.search.search(&request).await?;
    Ok(Json(response))
}

/// `POST /translate` with `{"text": "..."}`
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let text = request.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::Validation("Text to translate is required".to_string()));
    }

    let result = state.translator.translate(&text).await?;
    Ok(Json(result))
}
