use rizz_core::languages::language_name;
use rizz_types::{AUTO_DETECT, DEFAULT_LANGUAGE, ProviderTag, TranslationResult};
use serde::Serialize;

pub mod cache;
pub mod detect;
pub mod health;
pub mod translate;

pub use cache::{cache_stats, clear_cache};
pub use detect::{detect_language, languages};
pub use health::health;
pub use translate::{translate, translate_batch, translate_message};

fn default_from_lang() -> String {
    AUTO_DETECT.to_string()
}

fn default_to_lang() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Display name for a code, "Unknown" for codes outside the supported table
fn display_name(code: &str) -> String {
    language_name(code).unwrap_or("Unknown").to_string()
}

/// Translation as the chat client renders it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationView {
    pub original_text: String,
    pub translated_text: String,
    pub detected_language: String,
    pub from_language: String,
    pub to_language: String,
    pub cached: bool,
    pub provider: ProviderTag,
}

impl TranslationView {
    fn new(original_text: String, target: &str, result: TranslationResult) -> Self {
        Self {
            original_text,
            from_language: display_name(&result.detected_language),
            to_language: display_name(target),
            translated_text: result.translated_text,
            detected_language: result.detected_language,
            cached: result.cached,
            provider: result.provider,
        }
    }
}
