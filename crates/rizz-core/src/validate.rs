use rizz_types::{AUTO_DETECT, LanguageCode};

use crate::languages::{is_auto, is_supported, normalize_code};

/// Caller misuse, rejected before the orchestrator runs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported target language: {0}")]
    UnsupportedTargetLanguage(String),

    #[error("Unsupported source language: {0}")]
    UnsupportedSourceLanguage(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Too many texts: {count} (maximum {max})")]
    BatchTooLarge { count: usize, max: usize },
}

/// Target must be a supported code. Returns it normalized.
pub fn validate_target(code: &str) -> Result<LanguageCode, ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::MissingField("toLang"));
    }
    if !is_supported(code) {
        return Err(ValidationError::UnsupportedTargetLanguage(code.to_string()));
    }
    Ok(normalize_code(code))
}

/// Source must be supported or "auto". Returns it normalized.
pub fn validate_source(code: &str) -> Result<LanguageCode, ValidationError> {
    if is_auto(code) {
        return Ok(AUTO_DETECT.to_string());
    }
    if !is_supported(code) {
        return Err(ValidationError::UnsupportedSourceLanguage(code.to_string()));
    }
    Ok(normalize_code(code))
}

pub fn validate_batch_len(count: usize, max: usize) -> Result<(), ValidationError> {
    if count > max {
        return Err(ValidationError::BatchTooLarge { count, max });
    }
    Ok(())
}

/// Present and not blank
pub fn require_text<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}
