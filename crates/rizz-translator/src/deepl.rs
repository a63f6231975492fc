use std::time::Duration;

use async_trait::async_trait;

use crate::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, build_client,
    check_status, credential_looks_valid, read_json,
};

/// Languages DeepL cannot translate to or from
const UNSUPPORTED: &[&str] = &["hi", "bn", "ur", "fa", "ms", "sw"];

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            api_url,
        })
    }

    async fn request(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, TranslateError> {
        if !self.is_available() {
            return Err(TranslateError::NotConfigured);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(params)
            .send()
            .await?;

        read_json(check_status(response).await?).await
    }
}

fn source_code(code: &str) -> String {
    match code {
        "zh-tw" => "ZH".to_string(),
        other => other.to_uppercase(),
    }
}

fn target_code(code: &str) -> String {
    match code {
        "en" => "EN-US".to_string(),
        "pt" => "PT-BR".to_string(),
        "zh" => "ZH-HANS".to_string(),
        "zh-tw" => "ZH-HANT".to_string(),
        other => other.to_uppercase(),
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if UNSUPPORTED.contains(&from) || UNSUPPORTED.contains(&to) {
            return Err(TranslateError::UnsupportedLanguagePair {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let source_lang = source_code(from);
        let target_lang = target_code(to);
        let params = [
            ("text", text),
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
        ];

        let json = self.request(&params).await?;

        let translated_text = json["translations"]
            .get(0)
            .and_then(|t| t["text"].as_str())
            .ok_or_else(|| {
                TranslateError::MalformedResponse("No translation in response".to_string())
            })?;

        Ok(Translation {
            text: translated_text.to_string(),
            provider: "deepl".to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        // DeepL has no detection endpoint; a translation reports the source it saw
        let params = [("text", text), ("target_lang", "EN-US")];

        let json = self.request(&params).await?;

        let detected = json["translations"]
            .get(0)
            .and_then(|t| t["detected_source_language"].as_str())
            .ok_or_else(|| TranslateError::MalformedResponse("No detected language".to_string()))?;

        Ok(detected.to_lowercase())
    }

    fn is_available(&self) -> bool {
        credential_looks_valid(&self.api_key)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "deepl".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Form, Json, Router};
    use std::collections::HashMap;

    use super::*;
    use crate::test_support::{TEST_KEY, spawn_upstream};

    fn translator(url: String) -> DeepLTranslator {
        DeepLTranslator::new(TEST_KEY.to_string(), url, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_target_codes_use_regional_variants() {
        assert_eq!(target_code("en"), "EN-US");
        assert_eq!(target_code("zh-tw"), "ZH-HANT");
        assert_eq!(target_code("fr"), "FR");
        assert_eq!(source_code("zh-tw"), "ZH");
    }

    #[tokio::test]
    async fn test_translate_sends_form_and_auth_header() {
        let router = Router::new().route(
            "/",
            post(|headers: HeaderMap, Form(form): Form<HashMap<String, String>>| async move {
                let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
                assert_eq!(auth, Some(format!("DeepL-Auth-Key {TEST_KEY}").as_str()));
                assert_eq!(form.get("source_lang").map(String::as_str), Some("EN"));
                assert_eq!(form.get("target_lang").map(String::as_str), Some("ES"));
                Json(serde_json::json!({
                    "translations": [{ "detected_source_language": "EN", "text": "Hola" }]
                }))
            }),
        );
        let url = spawn_upstream(router).await;

        let result = translator(url).translate("Hello", "en", "es").await.unwrap();
        assert_eq!(result.text, "Hola");
        assert_eq!(result.provider, "deepl");
    }

    #[tokio::test]
    async fn test_detect_lowercases_source() {
        let router = Router::new().route(
            "/",
            post(|| async {
                Json(serde_json::json!({
                    "translations": [{ "detected_source_language": "DE", "text": "Good day" }]
                }))
            }),
        );
        let url = spawn_upstream(router).await;

        assert_eq!(translator(url).detect_language("Guten Tag").await.unwrap(), "de");
    }

    #[tokio::test]
    async fn test_unsupported_pair_fails_fast() {
        // Unreachable upstream: the check must happen before any request
        let t = translator("http://127.0.0.1:9".into());
        let err = t.translate("Hello", "en", "hi").await.unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguagePair { .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let router = Router::new().route("/", post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let url = spawn_upstream(router).await;

        let err = translator(url).translate("Hello", "en", "es").await.unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(_)));
    }
}
