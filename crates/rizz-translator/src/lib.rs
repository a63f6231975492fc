use std::time::Duration;

pub use rizz_types::LanguageCode;
use rizz_types::DEFAULT_LANGUAGE;

pub mod deepl;
pub mod google;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockMode, MockTranslator};

/// Keys shorter than this are treated as not configured
const MIN_CREDENTIAL_LEN: usize = 20;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError>;

    /// Detect language of text
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError>;

    /// Whether the provider has usable credentials. Never touches the network.
    fn is_available(&self) -> bool;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Best-effort detection, "en" when the provider cannot answer
    async fn detect_language_or_default(&self, text: &str) -> LanguageCode {
        match self.detect_language(text).await {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!(provider = %self.metadata().name, "detection failed: {e}");
                DEFAULT_LANGUAGE.to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    /// Name of the provider that answered
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Provider not configured")]
    NotConfigured,
}

/// Superficial credential check: present, not a placeholder, long enough
pub fn credential_looks_valid(key: &str) -> bool {
    let key = key.trim();
    if key.len() < MIN_CREDENTIAL_LEN {
        return false;
    }

    let lower = key.to_ascii_lowercase();
    let placeholder = lower.starts_with("your")
        || lower.contains("api_key_here")
        || lower.contains("changeme")
        || lower.chars().all(|c| c == 'x' || c == '-' || c == '_');

    !placeholder
}

/// Shared HTTP client with a mandatory request timeout
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, TranslateError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Map non-2xx statuses onto provider errors
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, TranslateError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimitExceeded);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(TranslateError::AuthenticationError);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TranslateError::ApiError(format!("HTTP {status}: {body}")));
    }

    Ok(response)
}

pub(crate) async fn read_json(
    response: reqwest::Response,
) -> Result<serde_json::Value, TranslateError> {
    response
        .json()
        .await
        .map_err(|e| TranslateError::MalformedResponse(format!("Failed to parse response: {e}")))
}

#[cfg(test)]
pub(crate) mod test_support;
