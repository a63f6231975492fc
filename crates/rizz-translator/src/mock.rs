//! Deterministic, network-free provider for exercising the translation
//! pipeline. Counts every call so tests can assert on cache behavior.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

#[derive(Debug, Clone)]
pub enum MockMode {
    /// "hello" → "hello_fr"
    Suffix,
    /// (text, target) → translation, suffix for anything unmapped
    Mappings(HashMap<(String, String), String>),
    /// Every call fails with this message
    Error(String),
    /// Every translate call panics
    Panic,
}

/// A recorded translate call
#[derive(Debug, Clone)]
pub struct MockCall {
    pub text: String,
    pub from: String,
    pub to: String,
    pub at: Instant,
}

#[derive(Debug, Clone)]
pub struct MockTranslator {
    name: String,
    mode: MockMode,
    detected: Option<LanguageCode>,
    available: bool,
    delay: Duration,
    translate_calls: Arc<AtomicUsize>,
    detect_calls: Arc<AtomicUsize>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            name: "mock".to_string(),
            mode,
            detected: None,
            available: true,
            delay: Duration::ZERO,
            translate_calls: Arc::default(),
            detect_calls: Arc::default(),
            calls: Arc::default(),
        }
    }

    /// Translate every `text` to `translation`, whatever the target
    pub fn returning(text: &str, target: &str, translation: &str) -> Self {
        let mut map = HashMap::new();
        map.insert((text.to_string(), target.to_string()), translation.to_string());
        Self::new(MockMode::Mappings(map))
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Language reported by detection. Without it detection fails.
    pub fn detecting(mut self, code: &str) -> Self {
        self.detected = Some(code.to_string());
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn apply(&self, text: &str, to: &str) -> Result<String, TranslateError> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{text}_{to}")),
            MockMode::Mappings(map) => Ok(map
                .get(&(text.to_string(), to.to_string()))
                .cloned()
                .unwrap_or_else(|| format!("{text}_{to}"))),
            MockMode::Error(msg) => Err(TranslateError::ApiError(msg.clone())),
            MockMode::Panic => panic!("mock provider panicked translating {text:?}"),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(MockCall {
                text: text.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                at: Instant::now(),
            });
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(Translation {
            text: self.apply(text, to)?,
            provider: self.name.clone(),
        })
    }

    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslateError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);

        if let MockMode::Error(msg) = &self.mode {
            return Err(TranslateError::ApiError(msg.clone()));
        }

        self.detected
            .clone()
            .ok_or_else(|| TranslateError::ApiError("detection not configured".to_string()))
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.name.clone(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
