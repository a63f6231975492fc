use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use rizz_config::Config;
use rizz_core::{AppState, TranslationCache, TranslationService};
use rizz_translator::Translator;
use serde_json::Value;
use tower::ServiceExt;

use crate::create_router;

pub fn app(providers: Vec<Arc<dyn Translator>>) -> Router {
    let config = Config::default();
    let cache = Arc::new(TranslationCache::new(Duration::from_secs(60)));
    let service = TranslationService::new(providers, cache, config.batch.clone());
    create_router(Arc::new(AppState::with_service(config, service)))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("request");

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
