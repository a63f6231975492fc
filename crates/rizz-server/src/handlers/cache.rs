use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rizz_core::AppState;
use rizz_types::CacheStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub success: bool,
    pub cache_stats: CacheStats,
}

#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub message: String,
}

pub async fn cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        success: true,
        cache_stats: state.translation.cache_stats(),
    })
}

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<ClearCacheResponse> {
    let removed = state.translation.cache_stats().size;
    state.translation.clear_cache();

    Json(ClearCacheResponse {
        success: true,
        message: format!("Translation cache cleared ({removed} entries)"),
    })
}
