use std::sync::Arc;

use rizz_config::Config;
use rizz_config::translator::TranslatorConfig;
use rizz_translator::{DeepLTranslator, GoogleTranslator, TranslateError, Translator};

use crate::cache::TranslationCache;
use crate::service::TranslationService;

pub struct AppState {
    pub config: Config,
    pub translation: TranslationService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let providers = build_providers(&config.translator)?;
        let cache = Arc::new(TranslationCache::new(config.cache.ttl()));
        let translation = TranslationService::new(providers, cache, config.batch.clone());

        Ok(Self::with_service(config, translation))
    }

    pub fn with_service(config: Config, translation: TranslationService) -> Self {
        let statuses = translation.provider_statuses();
        for status in &statuses {
            tracing::info!(
                provider = %status.name,
                tag = %status.tag,
                available = status.available,
                "translation provider registered"
            );
        }

        if !translation.has_available_provider() {
            tracing::warn!(
                "no translation provider configured, every translation will pass text through"
            );
        }

        Self {
            config,
            translation,
        }
    }
}

/// Google first, DeepL second
pub fn build_providers(
    config: &TranslatorConfig,
) -> Result<Vec<Arc<dyn Translator>>, TranslateError> {
    let google = GoogleTranslator::new(
        config.google_api_key.clone(),
        config.google_api_url.clone(),
        config.timeout(),
    )?;
    let deepl = DeepLTranslator::new(
        config.deepl_api_key.clone(),
        config.deepl_api_url.clone(),
        config.timeout(),
    )?;

    let providers: Vec<Arc<dyn Translator>> = vec![Arc::new(google), Arc::new(deepl)];
    Ok(providers)
}
