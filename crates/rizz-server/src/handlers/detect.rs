use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rizz_core::AppState;
use rizz_core::languages::supported_languages;
use serde::{Deserialize, Serialize};

use super::display_name;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub success: bool,
    pub detected_language: String,
    pub language_name: String,
}

pub async fn languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        success: true,
        languages: supported_languages(),
    })
}

pub async fn detect_language(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Json(request) = payload?;

    let detected = state.translation.detect_language(&request.text).await;

    Ok(Json(DetectResponse {
        success: true,
        language_name: display_name(&detected),
        detected_language: detected,
    }))
}
