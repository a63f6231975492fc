use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rizz_core::AppState;
use rizz_types::ProviderTag;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProviderView {
    pub name: String,
    pub tag: ProviderTag,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub providers: Vec<ProviderView>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let providers = state
        .translation
        .provider_statuses()
        .into_iter()
        .map(|status| ProviderView {
            name: status.name,
            tag: status.tag,
            available: status.available,
        })
        .collect();

    Json(HealthResponse {
        success: true,
        providers,
    })
}
