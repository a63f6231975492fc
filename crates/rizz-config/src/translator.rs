use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{env_or, env_string_or};

fn default_google_api_url() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_deepl_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_timeout_ms() -> u64 {
    8000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Google Cloud Translation key, primary provider
    #[serde(default)]
    pub google_api_key: String,
    #[serde(default = "default_google_api_url")]
    pub google_api_url: String,
    /// DeepL key, secondary provider
    #[serde(default)]
    pub deepl_api_key: String,
    #[serde(default = "default_deepl_api_url")]
    pub deepl_api_url: String,
    /// Per-request timeout applied by every provider client
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self {
            google_api_key: env_string_or("GOOGLE_TRANSLATE_API_KEY", ""),
            google_api_url: env_string_or("GOOGLE_TRANSLATE_API_URL", default_google_api_url()),
            deepl_api_key: env_string_or("DEEPL_API_KEY", ""),
            deepl_api_url: env_string_or("DEEPL_API_URL", default_deepl_api_url()),
            timeout_ms: env_or("PROVIDER_TIMEOUT_MS", default_timeout_ms()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            google_api_key: String::new(),
            google_api_url: default_google_api_url(),
            deepl_api_key: String::new(),
            deepl_api_url: default_deepl_api_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
