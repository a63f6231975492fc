//! Translation orchestrator.
//!
//! Resolves the source language, short-circuits no-op requests, consults the
//! cache and walks the provider chain in priority order. Provider failures
//! never escape: when nothing answers, the original text comes back tagged
//! `fallback`.

use std::sync::Arc;

use futures::future::join_all;
use rizz_config::batch::BatchConfig;
use rizz_translator::Translator;
use rizz_types::{
    BatchItem, CacheStats, DEFAULT_LANGUAGE, LanguageCode, MessageTranslation, ProviderTag,
    TranslationResult,
};

use crate::cache::TranslationCache;
use crate::languages::{is_auto, normalize_code};

/// Provider description for health reporting
#[derive(Debug, Clone)]
pub struct ProviderStatus {
    pub name: String,
    pub tag: ProviderTag,
    pub available: bool,
}

#[derive(Clone)]
pub struct TranslationService {
    providers: Arc<Vec<Arc<dyn Translator>>>,
    cache: Arc<TranslationCache>,
    batch: BatchConfig,
}

impl TranslationService {
    /// `providers` in priority order: the first is primary, the rest secondary
    pub fn new(
        providers: Vec<Arc<dyn Translator>>,
        cache: Arc<TranslationCache>,
        batch: BatchConfig,
    ) -> Self {
        Self {
            providers: Arc::new(providers),
            cache,
            batch,
        }
    }

    pub fn provider_statuses(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .enumerate()
            .map(|(position, provider)| ProviderStatus {
                name: provider.metadata().name,
                tag: ProviderTag::for_position(position),
                available: provider.is_available(),
            })
            .collect()
    }

    pub fn has_available_provider(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }

    fn available_providers(&self) -> impl Iterator<Item = (ProviderTag, &Arc<dyn Translator>)> {
        self.providers
            .iter()
            .enumerate()
            .filter(|(_, provider)| provider.is_available())
            .map(|(position, provider)| (ProviderTag::for_position(position), provider))
    }

    /// Always yields a language code. Empty text is "en" without a provider call.
    pub async fn detect_language(&self, text: &str) -> LanguageCode {
        if text.trim().is_empty() {
            return DEFAULT_LANGUAGE.to_string();
        }

        for (tag, provider) in self.available_providers() {
            match provider.detect_language(text).await {
                Ok(code) if !code.trim().is_empty() => {
                    let code = normalize_code(&code);
                    tracing::debug!(provider = %tag, %code, "language detected");
                    return code;
                }
                Ok(_) => {
                    tracing::warn!(provider = %tag, "detection returned an empty code");
                }
                Err(e) => {
                    tracing::warn!(provider = %tag, "detection failed: {e}");
                }
            }
        }

        tracing::debug!("no detector answered, defaulting to {DEFAULT_LANGUAGE}");
        DEFAULT_LANGUAGE.to_string()
    }

    pub async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslationResult {
        if text.trim().is_empty() {
            return TranslationResult {
                translated_text: text.to_string(),
                detected_language: DEFAULT_LANGUAGE.to_string(),
                cached: false,
                provider: ProviderTag::None,
            };
        }

        let target = normalize_code(target);
        let source = if is_auto(source) {
            self.detect_language(text).await
        } else {
            normalize_code(source)
        };

        // Checked before the cache so identity mappings are never stored
        if source == target {
            return TranslationResult {
                translated_text: text.to_string(),
                detected_language: source,
                cached: false,
                provider: ProviderTag::None,
            };
        }

        if let Some(entry) = self.cache.get(&source, &target, text) {
            tracing::debug!(%source, %target, provider = %entry.provider, "cache hit");
            return TranslationResult {
                translated_text: entry.translation,
                detected_language: source,
                cached: true,
                provider: entry.provider,
            };
        }

        for (tag, provider) in self.available_providers() {
            match provider.translate(text, &source, &target).await {
                Ok(translation) => {
                    tracing::debug!(
                        provider = %tag,
                        name = %translation.provider,
                        %source,
                        %target,
                        "translated"
                    );
                    self.cache
                        .set(&source, &target, text, &translation.text, tag);
                    return TranslationResult {
                        translated_text: translation.text,
                        detected_language: source,
                        cached: false,
                        provider: tag,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        provider = %tag,
                        name = %provider.metadata().name,
                        %source,
                        %target,
                        "translation failed, trying next provider: {e}"
                    );
                }
            }
        }

        tracing::warn!(%source, %target, "no provider could translate, passing text through");
        TranslationResult {
            translated_text: text.to_string(),
            detected_language: source,
            cached: false,
            provider: ProviderTag::Fallback,
        }
    }

    pub async fn translate_message(
        &self,
        message_id: Option<String>,
        content: &str,
        source: &str,
        target: &str,
    ) -> MessageTranslation {
        let result = self.translate_text(content, source, target).await;
        tracing::debug!(?message_id, provider = %result.provider, "message translated");

        MessageTranslation {
            message_id,
            original_text: content.to_string(),
            result,
        }
    }

    /// Chunks run one after another with a pause in between; texts inside a
    /// chunk are translated concurrently. Output is index-aligned with `texts`.
    pub async fn translate_batch(
        &self,
        texts: Vec<String>,
        source: &str,
        target: &str,
    ) -> Vec<BatchItem> {
        let chunk_size = self.batch.chunk_size.max(1);
        let failed_language = if is_auto(source) {
            DEFAULT_LANGUAGE.to_string()
        } else {
            normalize_code(source)
        };

        let mut items = Vec::with_capacity(texts.len());

        for (index, chunk) in texts.chunks(chunk_size).enumerate() {
            if index > 0 {
                tokio::time::sleep(self.batch.pacing()).await;
            }

            tracing::debug!(chunk = index, size = chunk.len(), "dispatching batch chunk");

            let handles = chunk.iter().map(|text| {
                let service = self.clone();
                let text = text.clone();
                let source = source.to_string();
                let target = target.to_string();
                tokio::spawn(async move { service.translate_text(&text, &source, &target).await })
            });

            for (text, outcome) in chunk.iter().zip(join_all(handles).await) {
                let item = match outcome {
                    Ok(result) => BatchItem::from_result(text.clone(), result),
                    Err(e) => {
                        tracing::error!(chunk = index, "batch item failed: {e}");
                        BatchItem::failed(text.clone(), failed_language.clone())
                    }
                };
                items.push(item);
            }
        }

        items
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("translation cache cleared");
    }
}
