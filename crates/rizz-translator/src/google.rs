//! Google Cloud Translation v2 client.
//!
//! Translation goes to `POST {api_url}?key=...`, detection to
//! `POST {api_url}/detect?key=...`. Both take a JSON body and answer with a
//! `data` envelope.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, build_client,
    check_status, credential_looks_valid, read_json,
};

#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TranslateError> {
        if !self.is_available() {
            return Err(TranslateError::NotConfigured);
        }

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        read_json(check_status(response).await?).await
    }
}

/// Our code to the one Google expects
fn to_google_code(code: &str) -> String {
    match code {
        "zh" => "zh-CN".to_string(),
        "zh-tw" => "zh-TW".to_string(),
        other => other.to_string(),
    }
}

/// Google's code back to ours
fn from_google_code(code: &str) -> LanguageCode {
    let code = code.to_lowercase();
    match code.as_str() {
        "zh-cn" => "zh".to_string(),
        "iw" => "he".to_string(),
        _ => code,
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        let body = json!({
            "q": text,
            "source": to_google_code(from),
            "target": to_google_code(to),
            "format": "text",
        });

        let json = self.post(&self.api_url, body).await?;

        let translated_text = json["data"]["translations"]
            .get(0)
            .and_then(|t| t["translatedText"].as_str())
            .ok_or_else(|| {
                TranslateError::MalformedResponse("No translation in response".to_string())
            })?;

        tracing::debug!(from, to, "google translated {} chars", text.len());

        Ok(Translation {
            text: translated_text.to_string(),
            provider: "google".to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let url = format!("{}/detect", self.api_url);
        let json = self.post(&url, json!({ "q": text })).await?;

        let detected = json["data"]["detections"]
            .get(0)
            .and_then(|d| d.get(0))
            .and_then(|d| d["language"].as_str())
            .filter(|code| !code.is_empty() && *code != "und")
            .ok_or_else(|| TranslateError::MalformedResponse("No detected language".to_string()))?;

        Ok(from_google_code(detected))
    }

    fn is_available(&self) -> bool {
        credential_looks_valid(&self.api_key)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "google".to_string(),
            requires_api_key: true,
            free_tier_available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use std::collections::HashMap;

    use super::*;
    use crate::test_support::{TEST_KEY, spawn_upstream};

    fn translator(url: String, key: &str) -> GoogleTranslator {
        GoogleTranslator::new(key.to_string(), url, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(to_google_code("zh"), "zh-CN");
        assert_eq!(to_google_code("zh-tw"), "zh-TW");
        assert_eq!(to_google_code("es"), "es");
        assert_eq!(from_google_code("zh-TW"), "zh-tw");
        assert_eq!(from_google_code("zh-CN"), "zh");
        assert_eq!(from_google_code("iw"), "he");
    }

    #[test]
    fn test_unavailable_without_key() {
        let t = translator("http://localhost".into(), "");
        assert!(!t.is_available());
    }

    #[tokio::test]
    async fn test_translate_reads_data_envelope() {
        let router = Router::new().route(
            "/",
            post(
                |Query(query): Query<HashMap<String, String>>, Json(body): Json<Value>| async move {
                    assert_eq!(query.get("key").map(String::as_str), Some(TEST_KEY));
                    assert_eq!(body["source"], "en");
                    assert_eq!(body["target"], "zh-CN");
                    Json(serde_json::json!({
                        "data": { "translations": [{ "translatedText": "你好" }] }
                    }))
                },
            ),
        );
        let url = spawn_upstream(router).await;

        let result = translator(url, TEST_KEY).translate("Hello", "en", "zh").await.unwrap();
        assert_eq!(result.text, "你好");
        assert_eq!(result.provider, "google");
    }

    #[tokio::test]
    async fn test_detect_maps_code() {
        let router = Router::new().route(
            "/detect",
            post(|| async {
                Json(serde_json::json!({
                    "data": { "detections": [[{ "language": "zh-CN", "confidence": 0.9 }]] }
                }))
            }),
        );
        let url = spawn_upstream(router).await;

        let detected = translator(url, TEST_KEY).detect_language("你好").await.unwrap();
        assert_eq!(detected, "zh");
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed() {
        let router = Router::new().route(
            "/",
            post(|| async { Json(serde_json::json!({ "data": {} })) }),
        );
        let url = spawn_upstream(router).await;

        let err = translator(url, TEST_KEY).translate("Hello", "en", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let router = Router::new()
            .route("/", post(|| async { StatusCode::TOO_MANY_REQUESTS }))
            .route("/detect", post(|| async { StatusCode::FORBIDDEN }));
        let url = spawn_upstream(router).await;
        let t = translator(url, TEST_KEY);

        let err = t.translate("Hello", "en", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::RateLimitExceeded));

        let err = t.detect_language("Hello").await.unwrap_err();
        assert!(matches!(err, TranslateError::AuthenticationError));
        assert_eq!(t.detect_language_or_default("Hello").await, "en");
    }

    #[tokio::test]
    async fn test_unconfigured_never_calls_network() {
        // Nothing listens on this port; a request would be a network error
        let t = translator("http://127.0.0.1:9".into(), "");
        let err = t.translate("Hello", "en", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::NotConfigured));
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let router = Router::new().route(
            "/",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        );
        let url = spawn_upstream(router).await;
        let t = GoogleTranslator::new(TEST_KEY.to_string(), url, Duration::from_millis(100))
            .unwrap();

        let err = t.translate("Hello", "en", "es").await.unwrap_err();
        match err {
            TranslateError::NetworkError(e) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
