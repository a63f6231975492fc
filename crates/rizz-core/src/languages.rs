use std::collections::BTreeMap;

use rizz_types::{AUTO_DETECT, LanguageCode};

/// Languages the chat client offers for translation
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("bn", "Bengali"),
    ("ur", "Urdu"),
    ("tr", "Turkish"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("pl", "Polish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("fa", "Persian"),
    ("he", "Hebrew"),
    ("el", "Greek"),
    ("cs", "Czech"),
    ("ro", "Romanian"),
    ("hu", "Hungarian"),
    ("sw", "Swahili"),
];

/// Lowercase, trimmed, `_` replaced by `-`
pub fn normalize_code(code: &str) -> LanguageCode {
    code.trim().to_lowercase().replace('_', "-")
}

pub fn is_auto(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(AUTO_DETECT)
}

pub fn is_supported(code: &str) -> bool {
    language_name(code).is_some()
}

pub fn language_name(code: &str) -> Option<&'static str> {
    let code = normalize_code(code);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn supported_languages() -> BTreeMap<&'static str, &'static str> {
    SUPPORTED_LANGUAGES.iter().copied().collect()
}
