use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rizz_core::AppState;
use rizz_core::validate::{
    ValidationError, require_text, validate_batch_len, validate_source, validate_target,
};
use rizz_types::BatchItem;
use serde::{Deserialize, Serialize};

use super::{TranslationView, default_from_lang, default_to_lang};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: Option<String>,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub translation: TranslationView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub texts: Option<Vec<String>>,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    pub message_id: Option<String>,
    pub content: Option<String>,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    pub to_lang: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message_id: Option<String>,
    pub translation: TranslationView,
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload?;

    let text = request.text.ok_or(ValidationError::MissingField("text"))?;
    let target = validate_target(&request.to_lang)?;
    let source = validate_source(&request.from_lang)?;

    let result = state.translation.translate_text(&text, &source, &target).await;
    tracing::info!(
        %source,
        %target,
        detected = %result.detected_language,
        provider = %result.provider,
        cached = result.cached,
        "translated text"
    );

    Ok(Json(TranslateResponse {
        success: true,
        translation: TranslationView::new(text, &target, result),
    }))
}

pub async fn translate_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(request) = payload?;

    let texts = request.texts.ok_or(ValidationError::MissingField("texts"))?;
    validate_batch_len(texts.len(), state.config.batch.max_texts)?;
    let target = validate_target(&request.to_lang)?;
    let source = validate_source(&request.from_lang)?;

    if texts.is_empty() {
        return Ok(Json(BatchResponse {
            success: true,
            results: Vec::new(),
        }));
    }

    let count = texts.len();
    let results = state.translation.translate_batch(texts, &source, &target).await;
    let failed = results.iter().filter(|item| item.error).count();
    tracing::info!(%source, %target, count, failed, "translated batch");

    Ok(Json(BatchResponse {
        success: true,
        results,
    }))
}

pub async fn translate_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;

    let content = require_text("content", request.content.as_deref())?;
    let target = validate_target(require_text("toLang", request.to_lang.as_deref())?)?;
    let source = validate_source(&request.from_lang)?;

    let message = state
        .translation
        .translate_message(request.message_id, content, &source, &target)
        .await;

    Ok(Json(MessageResponse {
        success: true,
        message_id: message.message_id,
        translation: TranslationView::new(message.original_text, &target, message.result),
    }))
}
