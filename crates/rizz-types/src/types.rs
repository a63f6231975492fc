use serde::{Deserialize, Serialize};

/// Lowercase language code, e.g. "es" or "zh-tw"
pub type LanguageCode = String;

/// Marker for "detect the source language first"
pub const AUTO_DETECT: &str = "auto";

/// Language used whenever detection has nothing better to offer
pub const DEFAULT_LANGUAGE: &str = "en";

/// Where a translation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTag {
    Primary,
    Secondary,
    /// Every provider failed, text is passed through untranslated
    Fallback,
    /// Nothing to translate
    None,
}

impl ProviderTag {
    /// Tag for the provider at `position` in the chain
    pub fn for_position(position: usize) -> Self {
        if position == 0 {
            ProviderTag::Primary
        } else {
            ProviderTag::Secondary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTag::Primary => "primary",
            ProviderTag::Secondary => "secondary",
            ProviderTag::Fallback => "fallback",
            ProviderTag::None => "none",
        }
    }

    /// True when the text was not translated because no provider answered
    pub fn is_degraded(&self) -> bool {
        matches!(self, ProviderTag::Fallback)
    }
}

impl std::fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_language: LanguageCode,
    pub cached: bool,
    pub provider: ProviderTag,
}

/// One entry of a batch response, index-aligned with the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub original_text: String,
    pub translated_text: String,
    pub detected_language: LanguageCode,
    pub cached: bool,
    pub provider: ProviderTag,
    pub error: bool,
}

impl BatchItem {
    pub fn from_result(original_text: String, result: TranslationResult) -> Self {
        Self {
            original_text,
            translated_text: result.translated_text,
            detected_language: result.detected_language,
            cached: result.cached,
            provider: result.provider,
            error: false,
        }
    }

    /// Passthrough entry for an item whose translation task failed
    pub fn failed(original_text: String, detected_language: LanguageCode) -> Self {
        Self {
            translated_text: original_text.clone(),
            original_text,
            detected_language,
            cached: false,
            provider: ProviderTag::Fallback,
            error: true,
        }
    }
}

/// Translation of a single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTranslation {
    pub message_id: Option<String>,
    pub original_text: String,
    #[serde(flatten)]
    pub result: TranslationResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}
